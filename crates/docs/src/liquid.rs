use quire_skeleton::{Column, Divide, Line, Page, PageLayoutType, Section};
use quire_types::Vector2;
use std::ops::{Deref, DerefMut};

/// Cumulative 2-D offset threaded down the skeleton during a draw pass.
///
/// Offsets are only ever added. Nested units bracket their own translations with
/// [`Liquid::scope`], so siblings never observe each other's offsets.
#[derive(Debug, Default)]
pub struct Liquid {
    x: f64,
    y: f64,
    stack: Vec<(f64, f64)>,
    saves: usize,
    restores: usize,
}

impl Liquid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn position(&self) -> Vector2 {
        Vector2::create(self.x, self.y)
    }

    /// Number of saved positions not yet restored.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// `(saves, restores)` issued since the last reset.
    pub fn counters(&self) -> (usize, usize) {
        (self.saves, self.restores)
    }

    pub fn reset(&mut self) {
        self.x = 0.0;
        self.y = 0.0;
        self.stack.clear();
        self.saves = 0;
        self.restores = 0;
    }

    pub fn translate(&mut self, x: f64, y: f64) {
        self.x += x;
        self.y += y;
    }

    pub fn translate_section(&mut self, section: &Section) {
        self.translate(0.0, section.top);
    }

    pub fn translate_column(&mut self, column: &Column) {
        self.translate(column.left, 0.0);
    }

    /// Moves to the top of the line box. With `with_indent` the line's first-line
    /// indent is applied as well.
    pub fn translate_line(&mut self, line: &Line, with_indent: bool) {
        let indent = if with_indent { line.padding_left } else { 0.0 };
        self.translate(indent, line.top + line.margin_top + line.padding_top);
    }

    pub fn translate_divide(&mut self, divide: &Divide) {
        self.translate(divide.left + divide.padding_left, 0.0);
    }

    pub fn translate_save(&mut self) {
        self.stack.push((self.x, self.y));
        self.saves += 1;
    }

    /// Pops the last saved position.
    ///
    /// # Panics
    ///
    /// Panics when nothing was saved: an unmatched restore would silently shift
    /// every following sibling.
    pub fn translate_restore(&mut self) {
        let Some((x, y)) = self.stack.pop() else {
            panic!("Liquid::translate_restore called without a matching translate_save");
        };
        self.x = x;
        self.y = y;
        self.restores += 1;
    }

    /// Advances past `page` and returns the applied delta.
    ///
    /// Vertical layouts stack pages downwards separated by `margin_top`;
    /// horizontal layouts stack them rightwards separated by `margin_left`.
    pub fn translate_page(
        &mut self,
        page: &Page,
        layout_type: PageLayoutType,
        margin_left: f64,
        margin_top: f64,
    ) -> Vector2 {
        let delta = match layout_type {
            PageLayoutType::Vertical => Vector2::create(0.0, page.height + margin_top),
            PageLayoutType::Horizontal => Vector2::create(page.width + margin_left, 0.0),
        };
        self.translate(delta.x, delta.y);
        delta
    }

    /// Saves the current position and restores it when the returned scope drops,
    /// including on early returns and unwinding.
    pub fn scope(&mut self) -> LiquidScope<'_> {
        self.translate_save();
        LiquidScope { liquid: self }
    }
}

/// A saved cursor position that is restored on drop.
pub struct LiquidScope<'a> {
    liquid: &'a mut Liquid,
}

impl Deref for LiquidScope<'_> {
    type Target = Liquid;

    fn deref(&self) -> &Liquid {
        self.liquid
    }
}

impl DerefMut for LiquidScope<'_> {
    fn deref_mut(&mut self) -> &mut Liquid {
        self.liquid
    }
}

impl Drop for LiquidScope<'_> {
    fn drop(&mut self) {
        self.liquid.translate_restore();
    }
}
