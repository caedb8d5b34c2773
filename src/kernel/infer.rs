use super::KernelError;
use crate::prelude::*;

impl Kernel {
    /// Type of a closed term. Prop is impredicative: a binder whose body is
    /// a proposition is itself a proposition.
    pub fn infer_type(
        &mut self,
        term: Id<Term>,
    ) -> Result<Id<Term>, KernelError> {
        if let Some(ty) = self.type_cache.get(&term) {
            return Ok(*ty);
        }
        let ty = match self.view(term) {
            TermView::Sort(Sort::Prop) => self.type_sort(),
            TermView::Sort(Sort::Type) => return Err(KernelError::TypeOfType),
            TermView::Constant(symbol) => self.symbols.ty(symbol),
            TermView::Local(local) => self.locals[local].ty,
            TermView::Var(index) => {
                return Err(KernelError::LooseBoundVariable(index))
            }
            TermView::App(f, a) => {
                let f_ty = self.infer_type(f)?;
                let f_ty = self.whnf(f_ty);
                let f_ty = self.unfold_not(f_ty);
                match self.view(f_ty) {
                    TermView::Pi(_, body) => self.instantiate(body, a),
                    _ => return Err(KernelError::NotAFunction),
                }
            }
            TermView::Pi(domain, body) => {
                self.infer_sort(domain)?;
                let x = self.fresh_local(domain);
                let body = self.instantiate(body, x);
                match self.infer_sort(body)? {
                    Sort::Prop => self.prop(),
                    Sort::Type => self.type_sort(),
                }
            }
            TermView::Lambda(domain, body) => {
                self.infer_sort(domain)?;
                let x = self.fresh_local(domain);
                let body = self.instantiate(body, x);
                let body_ty = self.infer_type(body)?;
                let body_ty = self.abstract_local(body_ty, x);
                self.pi(domain, body_ty)
            }
        };
        self.type_cache.insert(term, ty);
        Ok(ty)
    }

    fn infer_sort(&mut self, term: Id<Term>) -> Result<Sort, KernelError> {
        let ty = self.infer_type(term)?;
        let ty = self.whnf(ty);
        match self.view(ty) {
            TermView::Sort(sort) => Ok(sort),
            _ => Err(KernelError::NotAType),
        }
    }

    /// Equal up to head reduction and reading `not p` as `p → false`, at
    /// every position.
    pub fn convertible(&mut self, left: Id<Term>, right: Id<Term>) -> bool {
        if left == right {
            return true;
        }
        let left = self.whnf(left);
        let left = self.unfold_not(left);
        let right = self.whnf(right);
        let right = self.unfold_not(right);
        if left == right {
            return true;
        }
        match (self.view(left), self.view(right)) {
            (TermView::App(f, a), TermView::App(g, b))
            | (TermView::Pi(f, a), TermView::Pi(g, b))
            | (TermView::Lambda(f, a), TermView::Lambda(g, b)) => {
                self.convertible(f, g) && self.convertible(a, b)
            }
            _ => false,
        }
    }

    /// Is `term` a proposition, i.e. a type living in `Prop`?
    /// Ill-typed terms are not.
    pub fn is_prop(&mut self, term: Id<Term>) -> bool {
        match self.infer_type(term) {
            Ok(ty) => self.whnf(ty) == self.prop(),
            Err(error) => {
                log::trace!("term {:?} is not a proposition: {}", term, error);
                false
            }
        }
    }
}
