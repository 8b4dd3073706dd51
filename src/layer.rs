//! # Layer Trait
//!
//! Tower-style wrapping for engines.
//!
//! ```text
//! VirtualFs ──▶ Layer::layer() ──▶ Wrapped engine
//! ```
//!
//! A wrapper implements the same [`TreeRead`](crate::TreeRead),
//! [`TreeWrite`](crate::TreeWrite) and [`TreeTransfer`](crate::TreeTransfer)
//! traits as the engine it wraps and adds behaviour around each command.
//! [`PersistLayer`](crate::PersistLayer) is the wrapper this crate ships.

use crate::Vfs;

/// A layer that wraps an engine to add behaviour.
///
/// `layer(self, inner)` consumes both the layer configuration and the engine.
///
/// # Example
///
/// ```rust
/// use treevfs::Layer;
///
/// struct Audited<V> {
///     inner: V,
///     label: String,
/// }
///
/// struct AuditLayer {
///     label: String,
/// }
///
/// impl<V> Layer<V> for AuditLayer {
///     type Wrapped = Audited<V>;
///
///     fn layer(self, inner: V) -> Self::Wrapped {
///         Audited { inner, label: self.label }
///     }
/// }
/// ```
pub trait Layer<V> {
    /// The wrapped engine type.
    type Wrapped;

    /// Wrap `inner` with this layer.
    fn layer(self, inner: V) -> Self::Wrapped;
}

/// Fluent `.layer()` on any [`Vfs`].
///
/// ```rust
/// use treevfs::{Layer, LayerExt, Vfs};
///
/// fn wrap<V: Vfs, L: Layer<V>>(vfs: V, layer: L) -> L::Wrapped {
///     vfs.layer(layer)
/// }
/// ```
pub trait LayerExt: Vfs + Sized {
    /// Apply a layer to this engine.
    fn layer<L: Layer<Self>>(self, layer: L) -> L::Wrapped {
        layer.layer(self)
    }
}

impl<V: Vfs> LayerExt for V {}
