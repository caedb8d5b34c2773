use crate::core::extension::BranchExtension;
use crate::prelude::*;
use std::any::Any;
use std::collections::BTreeMap;

/// Indices for unit propagation.
///
/// `lemmas` maps each leading antecedent (disjunctions split into their
/// leaves) of a conditional hypothesis to that hypothesis, together with the
/// negated conclusion. `facts` maps each propositional hypothesis type to the
/// most recently activated hypothesis of that type.
///
/// Entries are never removed when a hypothesis dies. They go stale and are
/// evicted by the next lookup that touches them.
#[derive(Clone, Default)]
pub struct UnitExtension {
    lemmas: BTreeMap<Id<Term>, Vec<Id<Hypothesis>>>,
    facts: BTreeMap<Id<Term>, Id<Hypothesis>>,
}

impl UnitExtension {
    /// Hypotheses indexed under `key`, stale ones included, oldest first.
    pub fn lemmas(&self, key: Id<Term>) -> &[Id<Hypothesis>] {
        self.lemmas.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The hypothesis recorded for `fact`, stale or not.
    pub fn fact(&self, fact: Id<Term>) -> Option<Id<Hypothesis>> {
        self.facts.get(&fact).copied()
    }

    pub fn num_facts(&self) -> usize {
        self.facts.len()
    }

    pub fn num_lemma_keys(&self) -> usize {
        self.lemmas.len()
    }

    fn insert_lemma(&mut self, key: Id<Term>, id: Id<Hypothesis>) {
        let entries = self.lemmas.entry(key).or_default();
        // one activation inserts contiguously, so a repeat is always last
        if entries.last() != Some(&id) {
            entries.push(id);
        }
    }

    fn insert_disjunction(
        &mut self,
        kernel: &Kernel,
        term: Id<Term>,
        id: Id<Hypothesis>,
    ) {
        if let Some((left, right)) = kernel.is_or(term) {
            self.insert_disjunction(kernel, left, id);
            self.insert_disjunction(kernel, right, id);
        } else {
            // `a ∨ a` files the lemma under `a` once
            self.insert_lemma(term, id);
        }
    }

    /// Drop the given hypotheses from the entries under `key`.
    pub(crate) fn evict_lemmas(
        &mut self,
        key: Id<Term>,
        dead: &[Id<Hypothesis>],
    ) {
        if let Some(entries) = self.lemmas.get_mut(&key) {
            entries.retain(|id| !dead.contains(id));
            if entries.is_empty() {
                self.lemmas.remove(&key);
            }
        }
        log::trace!("evicted {} stale lemma(s) under {:?}", dead.len(), key);
    }

    /// A proof of `fact` from a live hypothesis, evicting a stale entry.
    pub fn find_live_fact(
        &mut self,
        hypotheses: &Hypotheses,
        fact: Id<Term>,
    ) -> Option<Id<Term>> {
        let id = self.fact(fact)?;
        let hypothesis = hypotheses.get(id);
        if hypothesis.is_dead() {
            self.facts.remove(&fact);
            log::trace!("evicted stale fact {:?}", fact);
            return None;
        }
        Some(hypothesis.proof())
    }

    /// A proof of `term` from live facts, looking through disjunctions:
    /// `A ∨ B` holds if `A` does (tried first) or `B` does.
    pub fn find_live_fact_in_disjunction(
        &mut self,
        kernel: &mut Kernel,
        hypotheses: &Hypotheses,
        term: Id<Term>,
    ) -> Option<Id<Term>> {
        match kernel.is_or(term) {
            Some((left, right)) => {
                if let Some(proof) =
                    self.find_live_fact_in_disjunction(kernel, hypotheses, left)
                {
                    Some(kernel.mk_or_intro_left(left, right, proof))
                } else if let Some(proof) = self
                    .find_live_fact_in_disjunction(kernel, hypotheses, right)
                {
                    Some(kernel.mk_or_intro_right(left, right, proof))
                } else {
                    None
                }
            }
            None => self.find_live_fact(hypotheses, term),
        }
    }
}

impl BranchExtension for UnitExtension {
    fn clone_extension(&self) -> Box<dyn BranchExtension> {
        Box::new(self.clone())
    }

    fn hypothesis_activated(
        &mut self,
        kernel: &mut Kernel,
        hypothesis: &Hypothesis,
        id: Id<Hypothesis>,
    ) {
        let mut ty = kernel.whnf(hypothesis.ty());
        if !kernel.is_pi(ty) {
            if kernel.is_prop(ty) {
                self.facts.insert(ty, id);
            }
            return;
        }

        let mut has_antecedent = false;
        while let Some((domain, body)) = antecedent(kernel, ty) {
            has_antecedent = true;
            self.insert_disjunction(kernel, domain, id);
            ty = body;
        }
        if has_antecedent && kernel.is_prop(ty) {
            let key = match kernel.is_not(ty) {
                Some(negated) => negated,
                None => kernel.mk_not(ty),
            };
            self.insert_lemma(key, id);
        }
    }

    fn hypothesis_deleted(
        &mut self,
        _kernel: &mut Kernel,
        _hypothesis: &Hypothesis,
        _id: Id<Hypothesis>,
    ) {
        // stale entries are evicted on lookup
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Split `A → B` into `(A, B)` when `A` is a proposition and `B` does not
/// depend on the proof of `A`.
pub(crate) fn antecedent(
    kernel: &mut Kernel,
    ty: Id<Term>,
) -> Option<(Id<Term>, Id<Term>)> {
    match kernel.view(ty) {
        TermView::Pi(domain, body)
            if kernel.closed(body) && kernel.is_prop(domain) =>
        {
            Some((domain, body))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::extension::{Extension, Registry};
    use proptest::prelude::*;

    struct Fixture {
        kernel: Kernel,
        state: State,
        unit: Id<Extension>,
    }

    impl Fixture {
        fn new() -> Self {
            let mut kernel = Kernel::new();
            let mut registry = Registry::default();
            let unit = registry
                .register(Box::new(UnitExtension::default()))
                .unwrap();
            let goal = kernel.mk_false();
            let state = registry.root(goal);
            Self {
                kernel,
                state,
                unit,
            }
        }

        fn prop(&mut self, name: &str) -> Id<Term> {
            let prop = self.kernel.prop();
            self.kernel.declare(name, prop)
        }

        fn assume(&mut self, ty: Id<Term>) -> Id<Hypothesis> {
            self.state.assume(&mut self.kernel, ty)
        }

        fn delete(&mut self, id: Id<Hypothesis>) {
            self.state.delete_hypothesis(&mut self.kernel, id);
        }

        fn extension(&self) -> &UnitExtension {
            self.state.extension(self.unit)
        }

        fn find(&mut self, term: Id<Term>) -> Option<Id<Term>> {
            let (hypotheses, extension) =
                self.state.split_extension::<UnitExtension>(self.unit);
            extension.find_live_fact_in_disjunction(
                &mut self.kernel,
                hypotheses,
                term,
            )
        }
    }

    #[test]
    fn test_antecedent_disjunctions_are_flattened() {
        let mut fixture = Fixture::new();
        let a = fixture.prop("a");
        let b = fixture.prop("b");
        let c = fixture.prop("c");
        let d = fixture.prop("d");
        let b_or_c = fixture.kernel.mk_or(b, c);
        let a_or_b_or_c = fixture.kernel.mk_or(a, b_or_c);
        let lemma = fixture.kernel.arrow(a_or_b_or_c, d);
        let h = fixture.assume(lemma);

        let extension = fixture.extension();
        for leaf in &[a, b, c] {
            assert_eq!(extension.lemmas(*leaf), &[h]);
        }
        assert!(extension.lemmas(a_or_b_or_c).is_empty());
        assert!(extension.lemmas(b_or_c).is_empty());
        // a, b, c and the negated conclusion
        assert_eq!(extension.num_lemma_keys(), 4);
        assert_eq!(extension.num_facts(), 0);
    }

    #[test]
    fn test_repeated_disjunct_is_filed_once() {
        let mut fixture = Fixture::new();
        let a = fixture.prop("a");
        let b = fixture.prop("b");
        let a_or_a = fixture.kernel.mk_or(a, a);
        let first = fixture.kernel.arrow(a_or_a, b);
        let second = fixture.kernel.arrow(a, b);
        let first = fixture.assume(first);
        let second = fixture.assume(second);

        assert_eq!(fixture.extension().lemmas(a), &[first, second]);
    }

    #[test]
    fn test_conclusion_is_indexed_negated() {
        let mut fixture = Fixture::new();
        let a = fixture.prop("a");
        let b = fixture.prop("b");
        let c = fixture.prop("c");
        let a_to_b = fixture.kernel.arrow(a, b);
        let not_c = fixture.kernel.mk_not(c);
        let a_to_not_c = fixture.kernel.arrow(a, not_c);
        let first = fixture.assume(a_to_b);
        let second = fixture.assume(a_to_not_c);

        let not_b = fixture.kernel.mk_not(b);
        let extension = fixture.extension();
        assert_eq!(extension.lemmas(a), &[first, second]);
        assert_eq!(extension.lemmas(not_b), &[first]);
        assert_eq!(extension.lemmas(c), &[second]);
    }

    #[test]
    fn test_dependent_and_data_binders_are_not_antecedents() {
        let mut fixture = Fixture::new();
        let ty = fixture.kernel.type_sort();
        let prop = fixture.kernel.prop();
        let nat = fixture.kernel.declare("nat", ty);
        let p_ty = fixture.kernel.arrow(nat, prop);
        let p = fixture.kernel.declare("p", p_ty);
        let var0 = fixture.kernel.var(0);
        let p_n = fixture.kernel.app(p, var0);
        let forall = fixture.kernel.pi(nat, p_n);
        fixture.assume(forall);
        fixture.assume(nat);

        let extension = fixture.extension();
        assert_eq!(extension.num_lemma_keys(), 0);
        assert_eq!(extension.num_facts(), 0);
    }

    #[test]
    fn test_definitions_are_unfolded_on_activation() {
        let mut fixture = Fixture::new();
        let a = fixture.prop("a");
        let prop = fixture.kernel.prop();
        let alias = fixture.kernel.define("alias", prop, a);
        let h = fixture.assume(alias);
        assert_eq!(fixture.extension().fact(a), Some(h));
        assert_eq!(fixture.extension().fact(alias), None);
    }

    #[test]
    fn test_latest_fact_shadows() {
        let mut fixture = Fixture::new();
        let a = fixture.prop("a");
        let first = fixture.assume(a);
        let second = fixture.assume(a);
        assert_eq!(fixture.extension().fact(a), Some(second));

        let expected = fixture.state.get_hypothesis(second).proof();
        assert_eq!(fixture.find(a), Some(expected));
        assert_ne!(Some(expected), Some(fixture.state.get_hypothesis(first).proof()));
    }

    #[test]
    fn test_stale_fact_is_evicted_on_lookup() {
        let mut fixture = Fixture::new();
        let a = fixture.prop("a");
        let h = fixture.assume(a);
        fixture.delete(h);
        // deletion alone leaves the entry in place
        assert_eq!(fixture.extension().fact(a), Some(h));

        assert_eq!(fixture.find(a), None);
        assert_eq!(fixture.extension().fact(a), None);
        assert_eq!(fixture.find(a), None);
        assert_eq!(fixture.extension().num_facts(), 0);
    }

    #[test]
    fn test_shadowed_fact_is_not_resurrected() {
        let mut fixture = Fixture::new();
        let a = fixture.prop("a");
        fixture.assume(a);
        let second = fixture.assume(a);
        fixture.delete(second);
        assert_eq!(fixture.find(a), None);
    }

    #[test]
    fn test_disjunctive_witness() {
        let mut fixture = Fixture::new();
        let a = fixture.prop("a");
        let b = fixture.prop("b");
        let h = fixture.assume(a);
        let proof_a = fixture.state.get_hypothesis(h).proof();
        let a_or_b = fixture.kernel.mk_or(a, b);

        let witness = fixture.find(a_or_b).unwrap();
        assert!(fixture.kernel.is_or_intro_left(witness));
        assert_eq!(fixture.kernel.unfold_apps(witness).1, vec![a, b, proof_a]);
        assert_eq!(fixture.kernel.infer_type(witness), Ok(a_or_b));
    }

    #[test]
    fn test_disjunctive_witness_from_the_right() {
        let mut fixture = Fixture::new();
        let a = fixture.prop("a");
        let b = fixture.prop("b");
        let c = fixture.prop("c");
        let h = fixture.assume(c);
        let proof_c = fixture.state.get_hypothesis(h).proof();
        let b_or_c = fixture.kernel.mk_or(b, c);
        let term = fixture.kernel.mk_or(a, b_or_c);

        let witness = fixture.find(term).unwrap();
        assert!(fixture.kernel.is_or_intro_right(witness));
        let inner = fixture.kernel.mk_or_intro_right(b, c, proof_c);
        assert_eq!(fixture.kernel.unfold_apps(witness).1, vec![a, b_or_c, inner]);
        assert_eq!(fixture.kernel.infer_type(witness), Ok(term));
    }

    #[test]
    fn test_disjunction_without_witness() {
        let mut fixture = Fixture::new();
        let a = fixture.prop("a");
        let b = fixture.prop("b");
        let a_or_b = fixture.kernel.mk_or(a, b);
        assert_eq!(fixture.find(a_or_b), None);
    }

    #[test]
    fn test_clones_evolve_independently() {
        let mut fixture = Fixture::new();
        let a = fixture.prop("a");
        let b = fixture.prop("b");
        fixture.assume(a);
        let mut child = fixture.state.fork();
        child.assume(&mut fixture.kernel, b);

        assert_eq!(fixture.extension().num_facts(), 1);
        assert_eq!(child.extension::<UnitExtension>(fixture.unit).num_facts(), 2);
    }

    #[derive(Clone, Debug)]
    enum Tree {
        Leaf(usize),
        Or(Box<Tree>, Box<Tree>),
    }

    fn tree() -> impl Strategy<Value = Tree> {
        let leaf = (0..6usize).prop_map(Tree::Leaf);
        leaf.prop_recursive(4, 16, 2, |inner| {
            (inner.clone(), inner)
                .prop_map(|(l, r)| Tree::Or(Box::new(l), Box::new(r)))
        })
    }

    fn build(fixture: &mut Fixture, leaves: &[Id<Term>], tree: &Tree) -> Id<Term> {
        match tree {
            Tree::Leaf(index) => leaves[*index],
            Tree::Or(left, right) => {
                let left = build(fixture, leaves, left);
                let right = build(fixture, leaves, right);
                fixture.kernel.mk_or(left, right)
            }
        }
    }

    fn collect(tree: &Tree, into: &mut Vec<usize>) {
        match tree {
            Tree::Leaf(index) => into.push(*index),
            Tree::Or(left, right) => {
                collect(left, into);
                collect(right, into);
            }
        }
    }

    proptest! {
        #[test]
        fn prop_flattening_indexes_exactly_the_leaves(tree in tree()) {
            let mut fixture = Fixture::new();
            let names = ["p0", "p1", "p2", "p3", "p4", "p5"];
            let leaves: Vec<_> =
                names.iter().map(|name| fixture.prop(name)).collect();
            let conclusion = fixture.prop("q");
            let antecedent = build(&mut fixture, &leaves, &tree);
            let lemma = fixture.kernel.arrow(antecedent, conclusion);
            let h = fixture.assume(lemma);

            let mut expected = vec![];
            collect(&tree, &mut expected);
            let not_q = fixture.kernel.mk_not(conclusion);
            let extension = fixture.extension();
            for (index, leaf) in leaves.iter().enumerate() {
                let indexed = extension.lemmas(*leaf);
                if expected.contains(&index) {
                    prop_assert_eq!(indexed, &[h][..]);
                } else {
                    prop_assert!(indexed.is_empty());
                }
            }
            expected.sort_unstable();
            expected.dedup();
            prop_assert_eq!(extension.num_lemma_keys(), expected.len() + 1);
            prop_assert_eq!(extension.lemmas(not_q), &[h][..]);
        }
    }
}
