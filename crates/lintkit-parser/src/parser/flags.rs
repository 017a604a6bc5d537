//! Packed node flags.

pub mod node_flags {
    pub const NONE: u32 = 0;
    /// `let` declaration list.
    pub const LET: u32 = 1 << 0;
    /// `const` declaration list.
    pub const CONST: u32 = 1 << 1;
    /// Call or access written with `?.`.
    pub const OPTIONAL_CHAIN: u32 = 1 << 2;
    /// Node was synthesized during error recovery.
    pub const MISSING: u32 = 1 << 3;
}
