use std::{any::type_name, fmt, marker::PhantomData};

use slotmap::new_key_type;

new_key_type! {
    /// Generational handle for a node in the scene arena. Handles to removed
    /// nodes never resolve again.
    pub struct NodeId;
}

/// A node handle minted by the scene when it inserted a `W`. Typed lookups
/// through it still fail with `Error::NotFound` once the node is removed.
#[derive(PartialEq, Eq, Hash)]
pub struct TypedId<W> {
    /// Arena key.
    node: NodeId,
    /// Widget type stored at `node`.
    widget: PhantomData<fn() -> W>,
}

impl<W> TypedId<W> {
    /// Only the scene knows which widget type it stored.
    pub(crate) fn new(node: NodeId) -> Self {
        Self {
            node,
            widget: PhantomData,
        }
    }

    /// The untyped id.
    pub fn id(&self) -> NodeId {
        self.node
    }
}

impl<W> fmt::Debug for TypedId<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = type_name::<W>().rsplit("::").next().unwrap_or("?");
        write!(f, "{name}@{:?}", self.node)
    }
}

impl<W> Clone for TypedId<W> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<W> Copy for TypedId<W> {}

impl<W> PartialEq<NodeId> for TypedId<W> {
    fn eq(&self, other: &NodeId) -> bool {
        self.node == *other
    }
}

impl<W> From<TypedId<W>> for NodeId {
    fn from(value: TypedId<W>) -> Self {
        value.node
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        Scene,
        error::{Error, Result},
        widgets::SizedBox,
    };

    #[test]
    fn typed_handles() -> Result<()> {
        let mut scene = Scene::new();
        let boxed = scene.add_typed(SizedBox::new(3, 4));
        assert_eq!(boxed, scene.roots()[0]);
        assert!(format!("{boxed:?}").starts_with("SizedBox@"));
        assert!(scene.widget::<SizedBox>(boxed).is_some());
        scene.remove(boxed)?;
        assert!(matches!(
            scene.with_widget::<SizedBox, _>(boxed, |_, _| ()),
            Err(Error::NotFound(_))
        ));
        Ok(())
    }
}
