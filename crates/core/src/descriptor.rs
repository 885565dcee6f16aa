//! Parameter descriptors
//!
//! A descriptor binds a short token (and optional group) to a typed storage
//! slot and to the accessor behaviors used to read, write and print it.
//! Descriptors are built once into a static table and never mutated.
//!
//! Behaviors are closed enums selected per descriptor at table construction,
//! so dispatch is a `match` rather than an indirect call. The storage slot is
//! reached through a [`Locator`], a plain function projecting the owning
//! settings struct onto one of its fields.

use bitflags::bitflags;

/// Maximum token length (significant characters)
pub const TOKEN_LEN: usize = 5;

/// Maximum group length
pub const GROUP_LEN: usize = 3;

bitflags! {
    /// Descriptor behavior flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct DescriptorFlags: u8 {
        /// Loaded with defaults or from NVM at boot
        const INITIALIZE = 0b0000_0001;
        /// Written to NVM by `persist`
        const PERSIST = 0b0000_0010;
        /// Keep the group prefix on the displayed token
        const NOSTRIP = 0b0000_0100;

        /// Initialize + persist
        const IP = Self::INITIALIZE.bits() | Self::PERSIST.bits();
        /// Initialize + persist + no-strip
        const IPN = Self::INITIALIZE.bits() | Self::PERSIST.bits() | Self::NOSTRIP.bits();
    }
}

/// Mutable view of a descriptor's backing storage
#[derive(Debug, PartialEq)]
pub enum Target<'a> {
    /// 8-bit unsigned slot
    U8(&'a mut u8),
    /// 32-bit unsigned slot
    U32(&'a mut u32),
    /// 32-bit float slot
    F32(&'a mut f32),
}

impl Target<'_> {
    /// Read the slot as a numeric value (exact for every slot type)
    pub fn value(&self) -> f64 {
        match self {
            Target::U8(v) => **v as f64,
            Target::U32(v) => **v as f64,
            Target::F32(v) => **v as f64,
        }
    }

    /// Write a numeric value into the slot, narrowing to the slot type
    pub fn store(&mut self, value: f64) {
        match self {
            Target::U8(v) => **v = value as u8,
            Target::U32(v) => **v = value as u32,
            Target::F32(v) => **v = value as f32,
        }
    }

    /// Raw 32-bit record representation of the slot
    pub fn raw(&self) -> u32 {
        match self {
            Target::U8(v) => **v as u32,
            Target::U32(v) => **v,
            Target::F32(v) => v.to_bits(),
        }
    }

    /// Write a raw 32-bit pattern into the slot
    pub fn store_raw(&mut self, raw: u32) {
        match self {
            Target::U8(v) => **v = raw as u8,
            Target::U32(v) => **v = raw,
            Target::F32(v) => **v = f32::from_bits(raw),
        }
    }

    /// Interpret a raw record according to this slot's type
    pub fn decode(&self, raw: u32) -> f64 {
        match self {
            Target::U8(_) | Target::U32(_) => raw as f64,
            Target::F32(_) => f32::from_bits(raw) as f64,
        }
    }
}

/// Projection from the settings struct onto one storage slot
pub type Locator<S> = for<'a> fn(&'a mut S) -> Target<'a>;

/// Bound read behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Getter {
    /// Inert placeholder; yields a null result
    Nul,
    /// 8-bit integer
    Ui8,
    /// 32-bit integer
    Int,
    /// Raw 32-bit pattern
    Data,
    /// Float with display precision
    Flt,
    /// Float in length units
    Flu,
    /// Group parent; expands children
    Group,
}

/// Bound write behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setter {
    /// Inert placeholder
    Nul,
    /// 8-bit integer
    Ui8,
    /// 8-bit integer restricted to `0..=max`
    Bounded(u8),
    /// 32-bit integer
    Int,
    /// Raw 32-bit pattern
    Data,
    /// Float
    Flt,
    /// Float supplied in display units, stored in canonical units
    Flu,
    /// Group parent; applies the child list
    Group,
}

/// Display style used by `print`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintStyle {
    /// Prints nothing
    Nul,
    /// Integer value
    Int,
    /// Float value
    Flt,
    /// Length value with the active units
    Lin,
    /// Rotary value in degrees
    Rot,
    /// String payload
    Str,
}

/// Parameter descriptor
pub struct Descriptor<S> {
    /// Group name, empty if none
    pub group: &'static str,
    /// Full token (group prefix included for prefixed groups)
    pub token: &'static str,
    /// Behavior flags
    pub flags: DescriptorFlags,
    /// Display precision for float kinds
    pub precision: u8,
    /// Human-readable label used by `print`
    pub label: &'static str,
    /// Print style
    pub print: PrintStyle,
    /// Read behavior
    pub get: Getter,
    /// Write behavior
    pub set: Setter,
    /// Backing storage, if any
    pub target: Option<Locator<S>>,
    /// Compiled default value
    pub default: f32,
}

impl<S> Descriptor<S> {
    /// Group parent descriptor
    pub const fn group_parent(group: &'static str, token: &'static str, label: &'static str) -> Self {
        Self {
            group,
            token,
            flags: DescriptorFlags::empty(),
            precision: 0,
            label,
            print: PrintStyle::Nul,
            get: Getter::Group,
            set: Setter::Group,
            target: None,
            default: 0.0,
        }
    }

    /// True for group parent descriptors
    pub fn is_group(&self) -> bool {
        matches!(self.get, Getter::Group)
    }

    /// Token with the group prefix removed
    ///
    /// Returns the full token when it does not start with the group name.
    pub fn stripped_token(&self) -> &'static str {
        self.token
            .strip_prefix(self.group)
            .filter(|rest| !rest.is_empty())
            .unwrap_or(self.token)
    }
}

impl<S> core::fmt::Debug for Descriptor<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Descriptor")
            .field("group", &self.group)
            .field("token", &self.token)
            .field("flags", &self.flags)
            .field("get", &self.get)
            .field("set", &self.set)
            .field("default", &self.default)
            .finish()
    }
}
