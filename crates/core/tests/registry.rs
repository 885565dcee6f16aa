//! End-to-end behavior of the settings registry against a small machine
//! table and an in-memory record store.

use motion_config_core::{
    BootState, CommMode, ConfigError, ConfigNode, ConfigTable, Descriptor, DescriptorFlags, Getter,
    Locator, MachineContext, MemoryNvm, NodeList, NvmStore, Outcome, PrintStyle, Registry, RegistryOptions,
    Setter, StringArena, Target, UnitsMode, ValueKind, BUILD_RECORD,
};

#[derive(Debug, Default)]
struct Axis {
    vm: f32,
    fr: f32,
    jm: u32,
}

#[derive(Debug)]
struct Machine {
    build: f32,
    x: Axis,
    y: Axis,
    mode: u8,
    mask: u32,
    units: UnitsMode,
}

impl Default for Machine {
    fn default() -> Self {
        Self {
            build: 0.0,
            x: Axis::default(),
            y: Axis::default(),
            mode: 0,
            mask: 0,
            units: UnitsMode::Millimeters,
        }
    }
}

impl MachineContext for Machine {
    fn units_mode(&self) -> UnitsMode {
        self.units
    }

    fn set_units_mode(&mut self, mode: UnitsMode) {
        self.units = mode;
    }

    fn init_status_report(&mut self) {}
}

macro_rules! slot {
    ($kind:ident, $($field:ident).+) => {{
        fn locate(m: &mut Machine) -> Target<'_> {
            Target::$kind(&mut m.$($field).+)
        }
        Some(locate as Locator<Machine>)
    }};
}

const fn entry(
    group: &'static str,
    token: &'static str,
    flags: DescriptorFlags,
    get: Getter,
    set: Setter,
    target: Option<Locator<Machine>>,
    default: f32,
) -> Descriptor<Machine> {
    Descriptor {
        group,
        token,
        flags,
        precision: 2,
        label: "",
        print: PrintStyle::Nul,
        get,
        set,
        target,
        default,
    }
}

static TABLE: [Descriptor<Machine>; 10] = [
    entry("sys", "fb", DescriptorFlags::empty(), Getter::Flt, Setter::Nul, slot!(F32, build), 0.0),
    entry("x", "xvm", DescriptorFlags::IP, Getter::Flu, Setter::Flu, slot!(F32, x.vm), 16000.0),
    entry("x", "xfr", DescriptorFlags::IP, Getter::Flu, Setter::Flu, slot!(F32, x.fr), 12000.0),
    entry("x", "xjm", DescriptorFlags::IP, Getter::Int, Setter::Int, slot!(U32, x.jm), 5000.0),
    entry("y", "yvm", DescriptorFlags::IP, Getter::Flu, Setter::Flu, slot!(F32, y.vm), 15000.0),
    entry("sys", "mode", DescriptorFlags::IP, Getter::Ui8, Setter::Bounded(2), slot!(U8, mode), 1.0),
    entry("sys", "mask", DescriptorFlags::IP, Getter::Data, Setter::Data, slot!(U32, mask), 0.0),
    entry("", "spare", DescriptorFlags::empty(), Getter::Nul, Setter::Nul, None, 0.0),
    Descriptor::group_parent("", "x", "x axis"),
    Descriptor::group_parent("", "y", "y axis"),
];

const BUILD: f32 = 83.09;

fn registry(comm_mode: CommMode) -> Registry<Machine, MemoryNvm<16>> {
    let options = RegistryOptions {
        comm_mode,
        build_id: BUILD,
        ..Default::default()
    };
    Registry::new(ConfigTable::new(&TABLE), MemoryNvm::new(), options)
}

#[test]
fn test_round_trip_every_bound_descriptor() {
    let reg = registry(CommMode::Json);
    let mut machine = Machine::default();

    for (index, descriptor) in reg.table().singles() {
        if descriptor.set == Setter::Nul || descriptor.target.is_none() {
            continue;
        }
        let value = match descriptor.set {
            Setter::Bounded(max) => max as f64,
            Setter::Int | Setter::Data => 4_000_000_001.0,
            _ => 1234.5,
        };
        let mut node = ConfigNode::new();
        node.index = Some(index);
        node.value = value;
        assert_eq!(reg.set_node(&mut machine, &mut node), Ok(Outcome::Done));

        let mut readback = ConfigNode::new();
        readback.index = Some(index);
        assert_eq!(reg.get_node(&mut machine, &mut readback), Ok(Outcome::Done));
        assert_eq!(readback.value, value, "descriptor {}", descriptor.token);
    }
}

#[test]
fn test_resolver_finds_every_descriptor() {
    let reg = registry(CommMode::Text);
    for (index, descriptor) in TABLE.iter().enumerate() {
        assert_eq!(reg.resolve("", descriptor.token), Some(index));
        if !descriptor.group.is_empty() && descriptor.token.starts_with(descriptor.group) {
            assert_eq!(reg.resolve(descriptor.group, descriptor.stripped_token()), Some(index));
        }
    }
    assert_eq!(reg.resolve("", "zvm"), None);
    assert_eq!(reg.resolve("x", "zz"), None);
    assert_eq!(reg.resolve("", "xv"), None);
}

#[test]
fn test_group_fan_out() {
    let reg = registry(CommMode::Text);
    let mut machine = Machine::default();
    machine.x.vm = 16000.0;
    machine.x.fr = 12000.0;
    machine.y.vm = 15000.0;

    let mut list = NodeList::new();
    let parent = list.header();
    list[parent].set_token("x");
    list[parent].index = reg.resolve("", "x");
    assert_eq!(reg.get(&mut machine, &mut list, parent), Ok(Outcome::Done));

    assert_eq!(list[parent].kind, ValueKind::Parent);
    let vm = list.next(parent).unwrap();
    let fr = list.next(vm).unwrap();
    let jm = list.next(fr).unwrap();
    assert_eq!(list[vm].token.as_str(), "vm");
    assert_eq!(list[fr].token.as_str(), "fr");
    assert_eq!(list[jm].token.as_str(), "jm");
    for id in [vm, fr, jm] {
        assert_eq!(list[id].depth, 1);
        assert_eq!(list[id].group.as_str(), "x");
    }
    assert_eq!(list[vm].value, 16000.0);
    assert!(list[list.next(jm).unwrap()].is_empty());
}

#[test]
fn test_bounded_setter_range() {
    let reg = registry(CommMode::Text);
    let mut machine = Machine::default();
    let mut node = ConfigNode::new();
    node.index = reg.resolve("", "mode");

    node.value = 3.0;
    assert_eq!(reg.set_node(&mut machine, &mut node), Err(ConfigError::InputValueUnsupported));
    assert_eq!(machine.mode, 0);

    for value in [0u8, 1, 2] {
        node.value = value as f64;
        assert_eq!(reg.set_node(&mut machine, &mut node), Ok(Outcome::Done));
        assert_eq!(machine.mode, value);
    }
}

#[test]
fn test_inert_placeholder() {
    let reg = registry(CommMode::Text);
    let mut machine = Machine::default();
    let mut node = ConfigNode::new();
    node.index = reg.resolve("", "spare");

    assert_eq!(reg.get_node(&mut machine, &mut node), Ok(Outcome::NoOp));
    assert_eq!(node.kind, ValueKind::Null);
    assert_eq!(reg.set_node(&mut machine, &mut node), Ok(Outcome::NoOp));
}

#[test]
fn test_arena_exhaustion_keeps_references() {
    let mut arena = StringArena::<24>::new();
    let first = arena.copy_in("homing cycle").unwrap();
    let offset = arena.write_offset();

    assert_eq!(arena.copy_in("limit switch hit on z"), Err(ConfigError::BufferFull));
    assert_eq!(arena.write_offset(), offset);
    assert_eq!(arena.get(first), Some("homing cycle"));
}

#[test]
fn test_list_reset_idempotent() {
    let mut list = NodeList::new();
    list.add_float("vel", 2.5).unwrap();
    list.reset();
    let once = list.clone();
    list.reset();

    assert!(once.iter().zip(list.iter()).all(|(a, b)| a == b));
    assert_eq!(once.strings().write_offset(), list.strings().write_offset());
}

#[test]
fn test_json_group_write_persists() {
    let mut reg = registry(CommMode::Json);
    let mut machine = Machine::default();
    let mut list = NodeList::new();

    let parent = list.body();
    list[parent].set_token("x");
    list[parent].index = reg.resolve("", "x");
    list[parent].kind = ValueKind::Parent;
    let child = list.add_float("vm", 900.0).unwrap();
    list[child].index = reg.resolve("x", "vm");

    assert_eq!(reg.set(&mut machine, &mut list, parent), Ok(Outcome::Done));
    assert_eq!(machine.x.vm, 900.0);
    assert_eq!(reg.nvm().record(1), Some(900.0f32.to_bits()));
}

#[test]
fn test_defaults_then_reload() {
    let mut reg = registry(CommMode::Text);
    let mut machine = Machine::default();

    assert_eq!(reg.init(&mut machine), Ok(BootState::Defaults));
    for (index, descriptor) in reg.table().singles() {
        if descriptor.flags.contains(DescriptorFlags::IP) {
            let raw = reg.nvm().record(index);
            let locate = descriptor.target.unwrap();
            assert_eq!(raw, Some(locate(&mut machine).raw()), "descriptor {}", descriptor.token);
            assert_eq!(locate(&mut machine).value(), descriptor.default as f64);
        }
    }
    assert_eq!(reg.nvm().record(BUILD_RECORD), Some(BUILD.to_bits()));

    // A later boot with the same build loads instead of reseeding
    let writes = reg.nvm().write_count();
    reg.nvm_mut().write_record(4, 777.0f32.to_bits()).unwrap();
    let mut rebooted = Machine::default();
    assert_eq!(reg.init(&mut rebooted), Ok(BootState::Loaded));
    assert_eq!(rebooted.y.vm, 777.0);
    assert_eq!(rebooted.x.vm, 16000.0);
    assert_eq!(rebooted.build, 0.0);
    assert_eq!(reg.nvm().write_count(), writes + 1);
}
