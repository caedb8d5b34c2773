use crate::prelude::*;

impl Kernel {
    pub fn mk_false(&self) -> Id<Term> {
        self.builtins.false_
    }

    pub fn mk_not(&mut self, p: Id<Term>) -> Id<Term> {
        let not = self.builtins.not;
        self.app(not, p)
    }

    pub fn mk_or(&mut self, a: Id<Term>, b: Id<Term>) -> Id<Term> {
        let or = self.builtins.or;
        self.apps(or, &[a, b])
    }

    /// `or.intro_left a b proof : a ∨ b` for `proof : a`.
    pub fn mk_or_intro_left(
        &mut self,
        a: Id<Term>,
        b: Id<Term>,
        proof: Id<Term>,
    ) -> Id<Term> {
        let intro = self.builtins.or_intro_left;
        self.apps(intro, &[a, b, proof])
    }

    /// `or.intro_right a b proof : a ∨ b` for `proof : b`.
    pub fn mk_or_intro_right(
        &mut self,
        a: Id<Term>,
        b: Id<Term>,
        proof: Id<Term>,
    ) -> Id<Term> {
        let intro = self.builtins.or_intro_right;
        self.apps(intro, &[a, b, proof])
    }

    pub fn is_or(&self, term: Id<Term>) -> Option<(Id<Term>, Id<Term>)> {
        if let TermView::App(f, b) = self.view(term) {
            if let TermView::App(or, a) = self.view(f) {
                if or == self.builtins.or {
                    return Some((a, b));
                }
            }
        }
        None
    }

    /// `not p` or `p → false`.
    pub fn is_not(&self, term: Id<Term>) -> Option<Id<Term>> {
        match self.view(term) {
            TermView::App(not, p) if not == self.builtins.not => Some(p),
            TermView::Pi(p, body) if body == self.builtins.false_ => Some(p),
            _ => None,
        }
    }

    /// Read `not p` as `p → false`. Other terms are returned unchanged.
    pub fn unfold_not(&mut self, term: Id<Term>) -> Id<Term> {
        match self.view(term) {
            TermView::App(not, p) if not == self.builtins.not => {
                let falsum = self.builtins.false_;
                self.arrow(p, falsum)
            }
            _ => term,
        }
    }

    pub fn is_or_intro_left(&self, term: Id<Term>) -> bool {
        self.unfold_apps(term).0 == self.builtins.or_intro_left
    }

    pub fn is_or_intro_right(&self, term: Id<Term>) -> bool {
        self.unfold_apps(term).0 == self.builtins.or_intro_right
    }
}
