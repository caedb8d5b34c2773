use crate::prelude::*;

impl Kernel {
    /// Shift loose bound variables at or above `cutoff` up by `amount`.
    pub(crate) fn lift(
        &mut self,
        term: Id<Term>,
        cutoff: u32,
        amount: u32,
    ) -> Id<Term> {
        if amount == 0 || self.terms.loose(term) <= cutoff {
            return term;
        }
        match self.view(term) {
            TermView::Var(index) => self.var(index + amount),
            TermView::App(f, a) => {
                let f = self.lift(f, cutoff, amount);
                let a = self.lift(a, cutoff, amount);
                self.app(f, a)
            }
            TermView::Pi(domain, body) => {
                let domain = self.lift(domain, cutoff, amount);
                let body = self.lift(body, cutoff + 1, amount);
                self.pi(domain, body)
            }
            TermView::Lambda(domain, body) => {
                let domain = self.lift(domain, cutoff, amount);
                let body = self.lift(body, cutoff + 1, amount);
                self.lambda(domain, body)
            }
            TermView::Sort(_) | TermView::Constant(_) | TermView::Local(_) => {
                term
            }
        }
    }

    /// Replace bound variable 0 in `body` with `value`.
    pub fn instantiate(&mut self, body: Id<Term>, value: Id<Term>) -> Id<Term> {
        self.instantiate_at(body, value, 0)
    }

    fn instantiate_at(
        &mut self,
        term: Id<Term>,
        value: Id<Term>,
        depth: u32,
    ) -> Id<Term> {
        if self.terms.loose(term) <= depth {
            return term;
        }
        match self.view(term) {
            TermView::Var(index) if index == depth => self.lift(value, 0, depth),
            TermView::Var(index) => self.var(index - 1),
            TermView::App(f, a) => {
                let f = self.instantiate_at(f, value, depth);
                let a = self.instantiate_at(a, value, depth);
                self.app(f, a)
            }
            TermView::Pi(domain, body) => {
                let domain = self.instantiate_at(domain, value, depth);
                let body = self.instantiate_at(body, value, depth + 1);
                self.pi(domain, body)
            }
            TermView::Lambda(domain, body) => {
                let domain = self.instantiate_at(domain, value, depth);
                let body = self.instantiate_at(body, value, depth + 1);
                self.lambda(domain, body)
            }
            TermView::Sort(_) | TermView::Constant(_) | TermView::Local(_) => {
                term
            }
        }
    }

    /// Replace occurrences of `local` in `term` with bound variable 0.
    pub fn abstract_local(&mut self, term: Id<Term>, local: Id<Term>) -> Id<Term> {
        self.abstract_at(term, local, 0)
    }

    fn abstract_at(
        &mut self,
        term: Id<Term>,
        local: Id<Term>,
        depth: u32,
    ) -> Id<Term> {
        if term == local {
            return self.var(depth);
        }
        match self.view(term) {
            TermView::App(f, a) => {
                let f = self.abstract_at(f, local, depth);
                let a = self.abstract_at(a, local, depth);
                self.app(f, a)
            }
            TermView::Pi(domain, body) => {
                let domain = self.abstract_at(domain, local, depth);
                let body = self.abstract_at(body, local, depth + 1);
                self.pi(domain, body)
            }
            TermView::Lambda(domain, body) => {
                let domain = self.abstract_at(domain, local, depth);
                let body = self.abstract_at(body, local, depth + 1);
                self.lambda(domain, body)
            }
            TermView::Sort(_)
            | TermView::Constant(_)
            | TermView::Local(_)
            | TermView::Var(_) => term,
        }
    }

    /// `λ (local : type of local), body`, with `local` abstracted out.
    pub fn fun(&mut self, local: Id<Term>, body: Id<Term>) -> Id<Term> {
        let domain = match self.local_type(local) {
            Some(domain) => domain,
            None => unreachable("abstracting over a term that is not a local"),
        };
        let body = self.abstract_local(body, local);
        self.lambda(domain, body)
    }

    /// Weak head normal form: beta-reduce and unfold definitions at the head.
    pub fn whnf(&mut self, term: Id<Term>) -> Id<Term> {
        if let Some(normal) = self.whnf_cache.get(&term) {
            return *normal;
        }
        let mut current = term;
        loop {
            let (head, args) = self.unfold_apps(current);
            match self.view(head) {
                TermView::Lambda(_, body) if !args.is_empty() => {
                    let reduced = self.instantiate(body, args[0]);
                    current = self.apps(reduced, &args[1..]);
                }
                TermView::Constant(symbol) => {
                    match self.symbols.value(symbol) {
                        Some(value) => current = self.apps(value, &args),
                        None => break,
                    }
                }
                _ => break,
            }
        }
        self.whnf_cache.insert(term, current);
        current
    }
}
