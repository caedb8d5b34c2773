//! A small hash-consed dependent type theory: the term oracle consulted by
//! the proof state and its actions.
//!
//! Terms use de Bruijn indices for bound variables and `Local` placeholders
//! for free ones. Every distinct term is interned exactly once, so structural
//! equality is `Id` equality and `Id` order is a total order on terms.

mod builder;
mod infer;
mod reduce;
mod symbol;
mod term;

pub use symbol::Symbol;
pub use term::{Local, Sort, Term, TermView};

use crate::prelude::*;
use fnv::FnvHashMap;
use symbol::Symbols;
use term::Terms;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum KernelError {
    #[error("loose bound variable {0}")]
    LooseBoundVariable(u32),
    #[error("application head does not have a function type")]
    NotAFunction,
    #[error("binder domain or body is not a type")]
    NotAType,
    #[error("the sort Type has no type")]
    TypeOfType,
}

struct Builtins {
    prop: Id<Term>,
    ty: Id<Term>,
    false_: Id<Term>,
    not: Id<Term>,
    or: Id<Term>,
    or_intro_left: Id<Term>,
    or_intro_right: Id<Term>,
}

pub struct Kernel {
    terms: Terms,
    symbols: Symbols,
    locals: Block<Local>,
    builtins: Builtins,
    whnf_cache: FnvHashMap<Id<Term>, Id<Term>>,
    type_cache: FnvHashMap<Id<Term>, Id<Term>>,
}

impl Default for Kernel {
    fn default() -> Self {
        Self::new()
    }
}

impl Builtins {
    fn new(terms: &mut Terms, symbols: &mut Symbols) -> Self {
        fn declare(
            terms: &mut Terms,
            symbols: &mut Symbols,
            name: &str,
            ty: Id<Term>,
        ) -> Id<Term> {
            let symbol = symbols.add(name.into(), ty, None);
            terms.intern(TermView::Constant(symbol))
        }

        let prop = terms.intern(TermView::Sort(Sort::Prop));
        let ty = terms.intern(TermView::Sort(Sort::Type));
        let unary = terms.intern(TermView::Pi(prop, prop));
        let binary = terms.intern(TermView::Pi(prop, unary));
        let false_ = declare(terms, symbols, "false", prop);
        let not = declare(terms, symbols, "not", unary);
        let or = declare(terms, symbols, "or", binary);

        let var0 = terms.intern(TermView::Var(0));
        let var1 = terms.intern(TermView::Var(1));
        let var2 = terms.intern(TermView::Var(2));
        let or_a = terms.intern(TermView::App(or, var2));
        let or_a_b = terms.intern(TermView::App(or_a, var1));
        // Π (a b : Prop), a → or a b
        let left = terms.intern(TermView::Pi(var1, or_a_b));
        let left = terms.intern(TermView::Pi(prop, left));
        let left = terms.intern(TermView::Pi(prop, left));
        // Π (a b : Prop), b → or a b
        let right = terms.intern(TermView::Pi(var0, or_a_b));
        let right = terms.intern(TermView::Pi(prop, right));
        let right = terms.intern(TermView::Pi(prop, right));
        let or_intro_left = declare(terms, symbols, "or.intro_left", left);
        let or_intro_right = declare(terms, symbols, "or.intro_right", right);
        Self {
            prop,
            ty,
            false_,
            not,
            or,
            or_intro_left,
            or_intro_right,
        }
    }
}

impl Kernel {
    pub fn new() -> Self {
        let mut terms = Terms::default();
        let mut symbols = Symbols::default();
        let builtins = Builtins::new(&mut terms, &mut symbols);
        let locals = Block::default();
        let whnf_cache = FnvHashMap::default();
        let type_cache = FnvHashMap::default();
        Self {
            terms,
            symbols,
            locals,
            builtins,
            whnf_cache,
            type_cache,
        }
    }

    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }

    pub fn view(&self, term: Id<Term>) -> TermView {
        self.terms.view(term)
    }

    pub fn prop(&self) -> Id<Term> {
        self.builtins.prop
    }

    pub fn type_sort(&self) -> Id<Term> {
        self.builtins.ty
    }

    /// Declare an opaque constant of the given type.
    pub fn declare(&mut self, name: &str, ty: Id<Term>) -> Id<Term> {
        let symbol = self.symbols.add(name.into(), ty, None);
        self.terms.intern(TermView::Constant(symbol))
    }

    /// Declare a constant that `whnf` unfolds to `value`.
    pub fn define(
        &mut self,
        name: &str,
        ty: Id<Term>,
        value: Id<Term>,
    ) -> Id<Term> {
        let symbol = self.symbols.add(name.into(), ty, Some(value));
        self.terms.intern(TermView::Constant(symbol))
    }

    pub fn symbol_name(&self, symbol: Id<Symbol>) -> &str {
        self.symbols.name(symbol)
    }

    pub fn var(&mut self, index: u32) -> Id<Term> {
        self.terms.intern(TermView::Var(index))
    }

    pub fn app(&mut self, f: Id<Term>, a: Id<Term>) -> Id<Term> {
        self.terms.intern(TermView::App(f, a))
    }

    pub fn apps(&mut self, f: Id<Term>, args: &[Id<Term>]) -> Id<Term> {
        args.iter().fold(f, |f, a| self.app(f, *a))
    }

    pub fn pi(&mut self, domain: Id<Term>, body: Id<Term>) -> Id<Term> {
        self.terms.intern(TermView::Pi(domain, body))
    }

    /// Non-dependent function type `domain → codomain`.
    pub fn arrow(&mut self, domain: Id<Term>, codomain: Id<Term>) -> Id<Term> {
        let body = self.lift(codomain, 0, 1);
        self.pi(domain, body)
    }

    pub fn lambda(&mut self, domain: Id<Term>, body: Id<Term>) -> Id<Term> {
        self.terms.intern(TermView::Lambda(domain, body))
    }

    /// A fresh placeholder standing for an unknown inhabitant of `ty`.
    pub fn fresh_local(&mut self, ty: Id<Term>) -> Id<Term> {
        let local = self.locals.push(Local { ty });
        self.terms.intern(TermView::Local(local))
    }

    pub fn local_type(&self, term: Id<Term>) -> Option<Id<Term>> {
        match self.view(term) {
            TermView::Local(local) => Some(self.locals[local].ty),
            _ => None,
        }
    }

    /// No loose bound variables.
    pub fn closed(&self, term: Id<Term>) -> bool {
        self.terms.loose(term) == 0
    }

    pub fn is_pi(&self, term: Id<Term>) -> bool {
        matches!(self.view(term), TermView::Pi(_, _))
    }

    pub fn binding_domain(&self, term: Id<Term>) -> Option<Id<Term>> {
        match self.view(term) {
            TermView::Pi(domain, _) | TermView::Lambda(domain, _) => {
                Some(domain)
            }
            _ => None,
        }
    }

    pub fn binding_body(&self, term: Id<Term>) -> Option<Id<Term>> {
        match self.view(term) {
            TermView::Pi(_, body) | TermView::Lambda(_, body) => Some(body),
            _ => None,
        }
    }

    /// Split `f a1 .. an` into `f` and `[a1, .., an]`.
    pub fn unfold_apps(&self, mut term: Id<Term>) -> (Id<Term>, Vec<Id<Term>>) {
        let mut args = vec![];
        while let TermView::App(f, a) = self.view(term) {
            args.push(a);
            term = f;
        }
        args.reverse();
        (term, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terms_are_shared() {
        let mut kernel = Kernel::new();
        let prop = kernel.prop();
        let a = kernel.declare("a", prop);
        let b = kernel.declare("b", prop);
        let first = kernel.arrow(a, b);
        let before = kernel.num_terms();
        let second = kernel.arrow(a, b);
        assert_eq!(first, second);
        assert_eq!(kernel.num_terms(), before);
        kernel.arrow(b, a);
        assert_eq!(kernel.num_terms(), before + 1);
    }

    #[test]
    fn test_builtins_are_well_typed() {
        let mut kernel = Kernel::new();
        let prop = kernel.prop();
        let a = kernel.declare("a", prop);
        let b = kernel.declare("b", prop);
        let ha = kernel.fresh_local(a);
        let or_a_b = kernel.mk_or(a, b);
        let proof = kernel.mk_or_intro_left(a, b, ha);
        assert_eq!(kernel.infer_type(proof), Ok(or_a_b));

        let hb = kernel.fresh_local(b);
        let proof = kernel.mk_or_intro_right(a, b, hb);
        assert_eq!(kernel.infer_type(proof), Ok(or_a_b));
    }

    #[test]
    fn test_arrow_is_closed_and_non_dependent() {
        let mut kernel = Kernel::new();
        let prop = kernel.prop();
        let a = kernel.declare("a", prop);
        let b = kernel.declare("b", prop);
        let a_to_b = kernel.arrow(a, b);
        assert!(kernel.is_pi(a_to_b));
        assert!(kernel.closed(a_to_b));
        assert_eq!(kernel.binding_domain(a_to_b), Some(a));
        assert_eq!(kernel.binding_body(a_to_b), Some(b));
    }

    #[test]
    fn test_unfold_apps() {
        let mut kernel = Kernel::new();
        let prop = kernel.prop();
        let f = kernel.declare("f", prop);
        let a = kernel.declare("a", prop);
        let b = kernel.declare("b", prop);
        let fab = kernel.apps(f, &[a, b]);
        assert_eq!(kernel.unfold_apps(fab), (f, vec![a, b]));
        assert_eq!(kernel.unfold_apps(f), (f, vec![]));
    }

    #[test]
    fn test_locals_remember_their_type() {
        let mut kernel = Kernel::new();
        let prop = kernel.prop();
        let a = kernel.declare("a", prop);
        let first = kernel.fresh_local(a);
        let second = kernel.fresh_local(a);
        assert_ne!(first, second);
        assert_eq!(kernel.local_type(first), Some(a));
        assert_eq!(kernel.local_type(a), None);
    }
}
