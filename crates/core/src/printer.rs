//! Human-readable parameter printing
//!
//! One line per parameter: `[<group><token>] <label> <value> <units>`.
//! Length values are held in millimeters and shown in the active units.

use crate::descriptor::PrintStyle;
use crate::list::NodeList;
use crate::node::NodeId;
use crate::options::{UnitsMode, MM_PER_INCH};
use crate::registry::Registry;
use crate::traits::{MachineContext, NvmStore};
use core::fmt::{self, Write};

/// Canonical length converted to the display units, with its label
fn display_length(value: f64, mode: UnitsMode) -> (f64, &'static str) {
    match mode {
        UnitsMode::Inches => (value / MM_PER_INCH as f64, "in"),
        UnitsMode::Millimeters => (value, "mm"),
    }
}

impl<S: MachineContext + 'static, N: NvmStore> Registry<S, N> {
    /// Print node `id` with its descriptor's label and print style
    ///
    /// Nodes without a valid index print nothing.
    pub fn print<W: Write>(&self, machine: &S, list: &NodeList, id: NodeId, out: &mut W) -> fmt::Result {
        let node = &list[id];
        let Ok(descriptor) = self.descriptor(node.index) else {
            return Ok(());
        };

        match descriptor.print {
            PrintStyle::Nul => Ok(()),
            PrintStyle::Int => writeln!(
                out,
                "[{}{}] {} {}",
                node.group, node.token, descriptor.label, node.value as i64
            ),
            PrintStyle::Flt => writeln!(
                out,
                "[{}{}] {} {:.*}",
                node.group, node.token, descriptor.label, node.precision as usize, node.value
            ),
            PrintStyle::Lin => {
                let (value, units) = display_length(node.value, machine.units_mode());
                writeln!(
                    out,
                    "[{}{}] {} {:.*} {}",
                    node.group, node.token, descriptor.label, node.precision as usize, value, units
                )
            }
            PrintStyle::Rot => writeln!(
                out,
                "[{}{}] {} {:.*} deg",
                node.group, node.token, descriptor.label, node.precision as usize, node.value
            ),
            PrintStyle::Str => writeln!(
                out,
                "[{}{}] {} {}",
                node.group,
                node.token,
                descriptor.label,
                list.string(id).unwrap_or("")
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::CommMode;
    use crate::registry::tests::{registry, Bench};
    use heapless::String;

    #[test]
    fn test_print_length_with_units() {
        let reg = registry(CommMode::Text);
        let mut bench = Bench {
            x_vm: 1200.0,
            ..Default::default()
        };
        let mut list = NodeList::new();
        let id = reg.add_object(&mut bench, &mut list, "xvm").unwrap();

        let mut out = String::<64>::new();
        reg.print(&bench, &list, id, &mut out).unwrap();
        assert_eq!(out.as_str(), "[xvm] velocity maximum 1200.000 mm\n");

        bench.set_units_mode(UnitsMode::Inches);
        out.clear();
        reg.print(&bench, &list, id, &mut out).unwrap();
        assert_eq!(out.as_str(), "[xvm] velocity maximum 47.244 in\n");
    }

    #[test]
    fn test_print_integer() {
        let reg = registry(CommMode::Text);
        let mut bench = Bench {
            sv: 2,
            ..Default::default()
        };
        let mut list = NodeList::new();
        let id = reg.add_object(&mut bench, &mut list, "sv").unwrap();

        let mut out = String::<64>::new();
        reg.print(&bench, &list, id, &mut out).unwrap();
        assert_eq!(out.as_str(), "[sv] status verbosity 2\n");
    }

    #[test]
    fn test_print_unresolved_is_silent() {
        let reg = registry(CommMode::Text);
        let bench = Bench::default();
        let list = NodeList::new();

        let mut out = String::<64>::new();
        reg.print(&bench, &list, list.body(), &mut out).unwrap();
        assert!(out.is_empty());
    }
}
