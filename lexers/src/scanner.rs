#![deny(warnings)]

/// Buffered cursor over an iterator with arbitrary backtracking inside the
/// pending lexeme.
///
/// Items from `src` are pulled into `buf` as the cursor moves forward.
/// `pos` indexes the last consumed item of the pending lexeme (-1 when
/// nothing is consumed yet). `ignore`/`extract` drop the pending lexeme.
pub struct Scanner<I: Iterator> where I::Item: Clone {
    src: I,
    buf: Vec<I::Item>,
    pos: isize,
    // items dropped from the front of buf so far
    offset: usize,
}

impl<I> Iterator for Scanner<I> where I: Iterator, I::Item: Clone {
    type Item = I::Item;
    fn next(&mut self) -> Option<Self::Item> {
        let next = (self.pos + 1) as usize;
        if next >= self.buf.len() {
            self.buf.push(self.src.next()?);
        }
        self.pos += 1;
        self.curr()
    }
}

impl<I> Scanner<I> where I: Iterator, I::Item: Clone {
    pub fn new(source: I) -> Scanner<I> {
        Scanner { src: source, buf: Vec::new(), pos: -1, offset: 0 }
    }

    /// Position within the pending lexeme, used to backtrack.
    pub fn buffer_pos(&self) -> isize { self.pos }

    pub fn set_buffer_pos(&mut self, pos: isize) -> bool {
        if pos < -1 || pos >= self.buf.len() as isize {
            return false;
        }
        self.pos = pos;
        true
    }

    /// Source index where the pending lexeme starts.
    pub fn offset(&self) -> usize { self.offset }

    pub fn curr(&self) -> Option<I::Item> {
        if self.pos < 0 {
            return None;
        }
        self.buf.get(self.pos as usize).cloned()
    }

    pub fn peek(&mut self) -> Option<I::Item> {
        let backtrack = self.pos;
        let peeked = self.next();
        self.pos = backtrack;
        peeked
    }

    /// Items consumed for the pending lexeme.
    pub fn view(&self) -> &[I::Item] {
        &self.buf[..(self.pos + 1) as usize]
    }

    /// Drop the pending lexeme.
    pub fn ignore(&mut self) {
        let n = (self.pos + 1) as usize;
        self.buf.drain(..n);
        self.offset += n;
        self.pos = -1;
    }

    pub fn extract(&mut self) -> Vec<I::Item> {
        let lexeme = self.view().to_vec();
        self.ignore();
        lexeme
    }
}

impl<I> Scanner<I> where I: Iterator, I::Item: Clone {
    /// Advance over the next item only if `pred` holds for it.
    pub fn accept_if<F>(&mut self, pred: F) -> Option<I::Item>
    where F: Fn(&I::Item) -> bool
    {
        let backtrack = self.pos;
        if let Some(next) = self.next() {
            if pred(&next) { return Some(next); }
        }
        self.pos = backtrack;
        None
    }

    /// Advance while `pred` holds. Returns whether anything was consumed.
    pub fn skip_while<F>(&mut self, pred: F) -> bool
    where F: Fn(&I::Item) -> bool
    {
        let mut advanced = false;
        while self.accept_if(&pred).is_some() { advanced = true; }
        advanced
    }
}

impl<I> Scanner<I> where I: Iterator, I::Item: Clone + PartialEq {
    // Advance the scanner only if the next item is in the 'any' set,
    // self.curr() will return the matched item if accept matched any
    pub fn accept_any(&mut self, any: &[I::Item]) -> Option<I::Item> {
        self.accept_if(|item| any.contains(item))
    }

    // Skip over the 'over' set, result is if the scanner was advanced,
    // after skip a call to self.curr() will return the last matching item
    pub fn skip_all(&mut self, over: &[I::Item]) -> bool {
        self.skip_while(|item| over.contains(item))
    }
}
