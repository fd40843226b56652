//! Ordered rule evaluation
//!
//! A rule set is an ordered list of named (predicate, action) pairs plus a
//! required fallback action. Evaluation walks the list top to bottom, runs
//! the first rule whose predicate holds, and falls back otherwise, so a
//! selection always exists by construction.
//!
//! Predicates receive `&mut Ctx` and may touch it (draw random numbers, read
//! or write storage). That makes evaluation order part of the observable
//! contract: predicates run top to bottom until one matches, and later
//! predicates are never run.

type Predicate<Ctx> = Box<dyn Fn(&mut Ctx) -> bool>;
type Action<Ctx, Out> = Box<dyn Fn(&mut Ctx) -> Out>;

struct Rule<Ctx, Out> {
    name: &'static str,
    when: Predicate<Ctx>,
    then: Action<Ctx, Out>,
}

/// Which rule fired and what its action produced
#[derive(Debug)]
pub struct Firing<Out> {
    pub rule: &'static str,
    pub output: Out,
}

/// Ordered rules with a mandatory fallback
pub struct RuleSet<Ctx, Out> {
    rules: Vec<Rule<Ctx, Out>>,
    fallback_name: &'static str,
    fallback: Action<Ctx, Out>,
}

impl<Ctx, Out> RuleSet<Ctx, Out> {
    pub fn builder() -> RuleSetBuilder<Ctx, Out> {
        RuleSetBuilder { rules: Vec::new() }
    }

    /// Rules ahead of the fallback
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Evaluate from the top; first match wins, fallback otherwise.
    pub fn evaluate(&self, ctx: &mut Ctx) -> Firing<Out> {
        for rule in &self.rules {
            if (rule.when)(ctx) {
                return Firing {
                    rule: rule.name,
                    output: (rule.then)(ctx),
                };
            }
        }
        Firing {
            rule: self.fallback_name,
            output: (self.fallback)(ctx),
        }
    }
}

/// Builds a `RuleSet`; `otherwise` is the only way out, so the fallback
/// cannot be forgotten.
pub struct RuleSetBuilder<Ctx, Out> {
    rules: Vec<Rule<Ctx, Out>>,
}

impl<Ctx, Out> RuleSetBuilder<Ctx, Out> {
    /// Append a rule. Earlier rules win over later ones.
    pub fn when(
        mut self,
        name: &'static str,
        when: impl Fn(&mut Ctx) -> bool + 'static,
        then: impl Fn(&mut Ctx) -> Out + 'static,
    ) -> Self {
        self.rules.push(Rule {
            name,
            when: Box::new(when),
            then: Box::new(then),
        });
        self
    }

    /// Close the set with the always-run fallback.
    pub fn otherwise(
        self,
        name: &'static str,
        then: impl Fn(&mut Ctx) -> Out + 'static,
    ) -> RuleSet<Ctx, Out> {
        RuleSet {
            rules: self.rules,
            fallback_name: name,
            fallback: Box::new(then),
        }
    }
}
