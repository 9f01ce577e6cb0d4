#![deny(warnings)]

use crate::scanner::Scanner;

static NUMERIC: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '.'];


impl<I: Iterator<Item=char>> Scanner<I> {
    pub fn extract_string(&mut self) -> String {
        self.extract().into_iter().collect()
    }

    /// Drop any whitespace ahead, unicode spaces included. Returns whether
    /// something was skipped.
    pub fn skip_whitespace(&mut self) -> bool {
        let skipped = self.skip_while(|c| c.is_whitespace());
        self.ignore();
        skipped
    }

    // scan a run like [0-9.]([0-9.]|[eE][+-]?)*
    // The text isn't validated, "1.2.3" or "4e" come out as-is so the caller
    // can report them as a single malformed literal.
    pub fn scan_numeric(&mut self) -> Option<String> {
        self.accept_any(NUMERIC)?;
        loop {
            if self.skip_all(NUMERIC) {
                continue;
            }
            if self.accept_any(&['e', 'E']).is_some() {
                self.accept_any(&['+', '-']); // exponent sign is optional
                continue;
            }
            break;
        }
        Some(self.extract_string())
    }
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use crate::scanner::Scanner;

    #[test]
    fn scan_numeric() {
        let tests = vec![
            "987", "41.98", ".5", "28e3", "54E+2", "54e-33", "85.365e3",
            "1.1.1", "1e-1.2", "4e",
        ];
        for t in tests.iter() {
            let result = Scanner::new(t.chars()).scan_numeric();
            assert_eq!(Some(t.to_string()), result);
        }
    }

    #[test]
    fn scan_numeric_stops() {
        let mut s = Scanner::new("12-3".chars());
        assert_eq!(s.scan_numeric(), Some("12".to_string()));
        assert_eq!(s.next(), Some('-'));
        s.ignore();
        assert_eq!(s.scan_numeric(), Some("3".to_string()));
        assert_eq!(s.scan_numeric(), None);

        let mut s = Scanner::new("1e-2/4".chars());
        assert_eq!(s.scan_numeric(), Some("1e-2".to_string()));
        assert_eq!(s.offset(), 4);
        assert_eq!(s.peek(), Some('/'));

        // exponent markers don't start a number
        assert_eq!(Scanner::new("e5".chars()).scan_numeric(), None);
    }

    #[test]
    fn skip_whitespace() {
        let mut s = Scanner::new(" \t 7 \n".chars());
        assert!(s.skip_whitespace());
        assert_eq!(s.offset(), 3);
        assert!(!s.skip_whitespace());
        assert_eq!(s.scan_numeric(), Some("7".to_string()));
        assert!(s.skip_whitespace());
        assert_eq!(s.next(), None);
        assert_eq!(s.offset(), 6);
    }

    #[test]
    fn skip_unicode_whitespace() {
        // form feed, vertical tab, nbsp, em space
        let mut s = Scanner::new("\u{0c}\u{0b}\u{a0}\u{2003}1".chars());
        assert!(s.skip_whitespace());
        assert_eq!(s.offset(), 4);
        assert_eq!(s.scan_numeric(), Some("1".to_string()));
    }
}
