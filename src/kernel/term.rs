use crate::prelude::*;
use fnv::FnvHashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sort {
    Prop,
    Type,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TermView {
    Sort(Sort),
    Constant(Id<Symbol>),
    Local(Id<Local>),
    Var(u32),
    App(Id<Term>, Id<Term>),
    Pi(Id<Term>, Id<Term>),
    Lambda(Id<Term>, Id<Term>),
}

pub struct Term {
    view: TermView,
    // one past the largest loose de Bruijn index, 0 if closed
    loose: u32,
}

pub struct Local {
    pub(crate) ty: Id<Term>,
}

#[derive(Default)]
pub(crate) struct Terms {
    terms: Block<Term>,
    interned: FnvHashMap<TermView, Id<Term>>,
}

impl Terms {
    pub(crate) fn len(&self) -> usize {
        self.terms.len().as_usize()
    }

    pub(crate) fn view(&self, id: Id<Term>) -> TermView {
        self.terms[id].view
    }

    pub(crate) fn loose(&self, id: Id<Term>) -> u32 {
        self.terms[id].loose
    }

    pub(crate) fn intern(&mut self, view: TermView) -> Id<Term> {
        if let Some(id) = self.interned.get(&view) {
            return *id;
        }
        let loose = match view {
            TermView::Var(index) => index + 1,
            TermView::App(f, a) => std::cmp::max(self.loose(f), self.loose(a)),
            TermView::Pi(domain, body) | TermView::Lambda(domain, body) => {
                std::cmp::max(
                    self.loose(domain),
                    self.loose(body).saturating_sub(1),
                )
            }
            TermView::Sort(_) | TermView::Constant(_) | TermView::Local(_) => 0,
        };
        let id = self.terms.push(Term { view, loose });
        self.interned.insert(view, id);
        id
    }
}
