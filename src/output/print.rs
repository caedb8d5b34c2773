use crate::prelude::*;
use std::fmt;

pub struct PrintTerm<'kernel>(pub &'kernel Kernel, pub Id<Term>);

impl fmt::Display for PrintTerm<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let PrintTerm(kernel, term) = *self;
        if let Some(p) = kernel.is_not(term) {
            return write!(f, "¬{}", PrintTerm(kernel, p));
        }
        if let Some((a, b)) = kernel.is_or(term) {
            return write!(
                f,
                "({} ∨ {})",
                PrintTerm(kernel, a),
                PrintTerm(kernel, b)
            );
        }
        match kernel.view(term) {
            TermView::Sort(Sort::Prop) => write!(f, "Prop"),
            TermView::Sort(Sort::Type) => write!(f, "Type"),
            TermView::Constant(symbol) => {
                write!(f, "{}", kernel.symbol_name(symbol))
            }
            TermView::Local(local) => write!(f, "x{}", local.as_usize()),
            TermView::Var(index) => write!(f, "#{}", index),
            TermView::App(_, _) => {
                let (head, args) = kernel.unfold_apps(term);
                write!(f, "({}", PrintTerm(kernel, head))?;
                for arg in args {
                    write!(f, " {}", PrintTerm(kernel, arg))?;
                }
                write!(f, ")")
            }
            TermView::Pi(domain, body) if kernel.closed(body) => write!(
                f,
                "({} → {})",
                PrintTerm(kernel, domain),
                PrintTerm(kernel, body)
            ),
            TermView::Pi(domain, body) => write!(
                f,
                "(Π {}, {})",
                PrintTerm(kernel, domain),
                PrintTerm(kernel, body)
            ),
            TermView::Lambda(domain, body) => write!(
                f,
                "(λ {}, {})",
                PrintTerm(kernel, domain),
                PrintTerm(kernel, body)
            ),
        }
    }
}
