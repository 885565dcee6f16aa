//! Typed accessor behaviors
//!
//! Implements the slot-level getters and setters bound to each descriptor.
//! Group behaviors are dispatched by the registry to the group expander and
//! never reach these functions with a storage slot.

use crate::descriptor::{Descriptor, Getter, Setter};
use crate::error::{ConfigError, Outcome, Result};
use crate::node::{ConfigNode, ValueKind};
use crate::options::{UnitsMode, MM_PER_INCH};

impl Getter {
    /// Read the descriptor's backing slot into `node`
    pub fn read<S>(self, descriptor: &Descriptor<S>, machine: &mut S, node: &mut ConfigNode) -> Result<Outcome> {
        let target = match (self, descriptor.target) {
            (Getter::Nul, _) | (Getter::Group, _) | (_, None) => {
                node.kind = ValueKind::Null;
                return Ok(Outcome::NoOp);
            }
            (_, Some(locate)) => locate(machine),
        };

        match self {
            Getter::Ui8 | Getter::Int => {
                node.value = target.value();
                node.kind = ValueKind::Integer;
            }
            Getter::Data => node.set_data(target.raw()),
            Getter::Flt | Getter::Flu => {
                node.value = target.value();
                node.precision = descriptor.precision;
                node.kind = ValueKind::Float;
            }
            Getter::Nul | Getter::Group => {}
        }
        Ok(Outcome::Done)
    }
}

impl Setter {
    /// Write `node`'s value into the descriptor's backing slot
    ///
    /// `Bounded` setters reject values outside `0..=max` without touching
    /// storage. `Flu` converts inch input to millimeters in storage but
    /// leaves the node value as supplied.
    pub fn write<S>(
        self,
        descriptor: &Descriptor<S>,
        machine: &mut S,
        node: &mut ConfigNode,
        units: UnitsMode,
    ) -> Result<Outcome> {
        let locate = match (self, descriptor.target) {
            (Setter::Nul, _) | (Setter::Group, _) | (_, None) => return Ok(Outcome::NoOp),
            (_, Some(locate)) => locate,
        };

        if let Setter::Bounded(max) = self {
            if !(0.0..=max as f64).contains(&node.value) {
                return Err(ConfigError::InputValueUnsupported);
            }
        }

        let mut target = locate(machine);
        match self {
            Setter::Ui8 | Setter::Bounded(_) | Setter::Int => {
                target.store(node.value);
                node.kind = ValueKind::Integer;
            }
            Setter::Data => {
                target.store_raw(node.data());
                node.kind = ValueKind::Data;
            }
            Setter::Flt => {
                target.store(node.value);
                node.kind = ValueKind::Float;
            }
            Setter::Flu => {
                let canonical = match units {
                    UnitsMode::Inches => node.value * MM_PER_INCH as f64,
                    UnitsMode::Millimeters => node.value,
                };
                target.store(canonical);
                node.kind = ValueKind::Float;
            }
            Setter::Nul | Setter::Group => {}
        }
        Ok(Outcome::Done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{DescriptorFlags, PrintStyle, Target};

    #[derive(Default)]
    struct Slots {
        mode: u8,
        count: u32,
        feed: f32,
    }

    fn mode(s: &mut Slots) -> Target<'_> {
        Target::U8(&mut s.mode)
    }

    fn count(s: &mut Slots) -> Target<'_> {
        Target::U32(&mut s.count)
    }

    fn feed(s: &mut Slots) -> Target<'_> {
        Target::F32(&mut s.feed)
    }

    fn descriptor(get: Getter, set: Setter, target: Option<crate::descriptor::Locator<Slots>>) -> Descriptor<Slots> {
        Descriptor {
            group: "",
            token: "t",
            flags: DescriptorFlags::IP,
            precision: 3,
            label: "test",
            print: PrintStyle::Nul,
            get,
            set,
            target,
            default: 0.0,
        }
    }

    #[test]
    fn test_bounded_rejects_out_of_range() {
        let d = descriptor(Getter::Ui8, Setter::Bounded(2), Some(mode));
        let mut slots = Slots { mode: 1, ..Default::default() };
        let mut node = ConfigNode::new();

        for v in [3.0, -1.0, f64::NAN] {
            node.value = v;
            let result = d.set.write(&d, &mut slots, &mut node, UnitsMode::Millimeters);
            assert_eq!(result, Err(ConfigError::InputValueUnsupported));
            assert_eq!(slots.mode, 1);
        }

        for v in [0.0, 1.0, 2.0] {
            node.value = v;
            assert_eq!(d.set.write(&d, &mut slots, &mut node, UnitsMode::Millimeters), Ok(Outcome::Done));
            assert_eq!(slots.mode as f64, v);
        }
    }

    #[test]
    fn test_integer_round_trip_is_exact() {
        let d = descriptor(Getter::Int, Setter::Int, Some(count));
        let mut slots = Slots::default();
        let mut node = ConfigNode::new();
        node.value = u32::MAX as f64;

        d.set.write(&d, &mut slots, &mut node, UnitsMode::Millimeters).unwrap();
        node.value = 0.0;
        d.get.read(&d, &mut slots, &mut node).unwrap();

        assert_eq!(node.kind, ValueKind::Integer);
        assert_eq!(node.value as u32, u32::MAX);
    }

    #[test]
    fn test_float_getter_sets_precision() {
        let d = descriptor(Getter::Flt, Setter::Flt, Some(feed));
        let mut slots = Slots { feed: 0.125, ..Default::default() };
        let mut node = ConfigNode::new();

        d.get.read(&d, &mut slots, &mut node).unwrap();
        assert_eq!(node.kind, ValueKind::Float);
        assert_eq!(node.precision, 3);
        assert_eq!(node.value, 0.125);
    }

    #[test]
    fn test_length_setter_converts_inches() {
        let d = descriptor(Getter::Flu, Setter::Flu, Some(feed));
        let mut slots = Slots::default();
        let mut node = ConfigNode::new();
        node.value = 2.0;

        d.set.write(&d, &mut slots, &mut node, UnitsMode::Inches).unwrap();
        assert_eq!(slots.feed, 50.8);
        assert_eq!(node.value, 2.0);
    }

    #[test]
    fn test_data_setter_keeps_bits() {
        let d = descriptor(Getter::Data, Setter::Data, Some(count));
        let mut slots = Slots::default();
        let mut node = ConfigNode::new();
        node.set_data(0x8000_0001);

        d.set.write(&d, &mut slots, &mut node, UnitsMode::Millimeters).unwrap();
        assert_eq!(slots.count, 0x8000_0001);
        assert_eq!(node.kind, ValueKind::Data);
    }

    #[test]
    fn test_inert_behaviors() {
        let d = descriptor(Getter::Nul, Setter::Nul, None);
        let mut slots = Slots::default();
        let mut node = ConfigNode::new();

        assert_eq!(d.get.read(&d, &mut slots, &mut node), Ok(Outcome::NoOp));
        assert_eq!(node.kind, ValueKind::Null);
        assert_eq!(d.set.write(&d, &mut slots, &mut node, UnitsMode::Inches), Ok(Outcome::NoOp));
    }
}
