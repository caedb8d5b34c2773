use crate::prelude::*;

pub struct Symbol {
    pub(crate) name: String,
    pub(crate) ty: Id<Term>,
    pub(crate) value: Option<Id<Term>>,
}

#[derive(Default)]
pub(crate) struct Symbols {
    symbols: Block<Symbol>,
}

impl Symbols {
    pub(crate) fn add(
        &mut self,
        name: String,
        ty: Id<Term>,
        value: Option<Id<Term>>,
    ) -> Id<Symbol> {
        self.symbols.push(Symbol { name, ty, value })
    }

    pub(crate) fn name(&self, id: Id<Symbol>) -> &str {
        &self.symbols[id].name
    }

    pub(crate) fn ty(&self, id: Id<Symbol>) -> Id<Term> {
        self.symbols[id].ty
    }

    pub(crate) fn value(&self, id: Id<Symbol>) -> Option<Id<Term>> {
        self.symbols[id].value
    }
}
