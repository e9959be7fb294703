//! Stack frame layout of the function being generated.
//!
//! Every value is one byte kept in the A half of a pushed AF pair, so each
//! slot takes two bytes of stack. After the prologue IX points at the saved
//! IX, the return address sits at IX+2 and the arguments above it; locals
//! grow downwards from IX.

use crate::{ast::ast::Parameter, errors::errors::CodegenError, SourceContext};

/// Saved IX and the return address.
const ARGUMENTS_OFFSET: i64 = 4;
const SLOT_SIZE: i64 = 2;

#[derive(Debug, Default)]
pub struct FrameLayout {
    /// Visible names with their IX displacement, innermost last.
    slots: Vec<(String, i8)>,
    /// Length of `slots` when each open block was entered.
    block_marks: Vec<usize>,
    local_count: usize,
    function_name: String,
    context: SourceContext,
}

impl FrameLayout {
    pub fn new() -> Self {
        FrameLayout::default()
    }

    /// Starts a new function. The caller pushes arguments left to right, so
    /// the last one is the closest to the return address.
    pub fn enter_function(
        &mut self,
        function_name: &str,
        parameters: &[Parameter],
        context: SourceContext,
    ) -> Result<(), CodegenError> {
        self.slots.clear();
        self.block_marks.clear();
        self.local_count = 0;
        self.function_name = String::from(function_name);
        self.context = context;

        let count = parameters.len() as i64;
        for (index, parameter) in parameters.iter().enumerate() {
            let displacement = ARGUMENTS_OFFSET + SLOT_SIZE * (count - 1 - index as i64) + 1;
            let displacement = self.fit(displacement)?;
            self.slots.push((parameter.name.clone(), displacement));
        }

        Ok(())
    }

    pub fn open_block(&mut self) {
        self.block_marks.push(self.slots.len());
    }

    /// Forgets the locals of the innermost block and returns how many there were.
    pub fn close_block(&mut self) -> usize {
        let mark = self.block_marks.pop().unwrap_or(self.slots.len());
        let removed = self.slots.len().saturating_sub(mark);

        self.slots.truncate(mark);
        self.local_count = self.local_count.saturating_sub(removed);
        removed
    }

    /// Records a local that has just been pushed and returns its displacement.
    pub fn push_local(&mut self, name: &str) -> Result<i8, CodegenError> {
        self.local_count += 1;
        let displacement = self.fit(1 - SLOT_SIZE * self.local_count as i64)?;

        self.slots.push((String::from(name), displacement));
        Ok(displacement)
    }

    /// Displacement of the innermost slot called `name`.
    pub fn lookup(&self, name: &str) -> Option<i8> {
        self.slots
            .iter()
            .rev()
            .find(|(slot_name, _)| slot_name == name)
            .map(|(_, displacement)| *displacement)
    }

    pub fn local_count(&self) -> usize {
        self.local_count
    }

    fn fit(&self, displacement: i64) -> Result<i8, CodegenError> {
        i8::try_from(displacement).map_err(|_| CodegenError::FrameTooLarge {
            function_name: self.function_name.clone(),
            context: self.context,
        })
    }
}

/// Operand addressing a frame slot, such as `(ix+5)` or `(ix-1)`.
pub fn ix_operand(displacement: i8) -> String {
    format!("(ix{:+})", displacement)
}
