//! Hash container aliases used by the metadata maps.

/// A `hashbrown` map with a fixed-seed foldhash state.
///
/// Metadata maps are built once per type and never rehashed afterwards, so a
/// fixed seed keeps construction cheap and deterministic.
pub(crate) type HashMap<K, V> = hashbrown::HashMap<K, V, foldhash::fast::FixedState>;

/// Map keyed by [`TypeId`](core::any::TypeId), used by the generic type cells.
pub(crate) type TypeIdMap<V> =
    hashbrown::HashMap<core::any::TypeId, V, foldhash::fast::FixedState>;
