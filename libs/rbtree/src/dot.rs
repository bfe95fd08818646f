use core::fmt;

use crate::node::{Color, NodeRef};
use crate::utils::Side;
use crate::RBTree;

/// Formats a [`RBTree`] as a graphviz digraph.
///
/// Created by [`RBTree::dot`].
pub struct Dot<'a, K> {
    pub(crate) tree: &'a RBTree<K>,
}

impl<K> Dot<'_, K>
where
    K: fmt::Debug,
{
    fn node_fmt(&self, f: &mut fmt::Formatter, node: NodeRef) -> fmt::Result {
        let inner = self.tree.pool.get(node);
        let id = node.index();

        let (fill, font) = match inner.color {
            Color::Red => ("red", "black"),
            Color::Black => ("black", "white"),
        };
        f.write_fmt(format_args!(
            r#"{id} [label="{key:?}" style=filled fillcolor={fill} fontcolor={font}];"#,
            key = inner.key,
        ))?;

        if let Some(up) = inner.parent {
            f.write_fmt(format_args!(
                r#"{id} -> {} [label="up" style=dashed];"#,
                up.index()
            ))?;
        }

        for side in [Side::Left, Side::Right] {
            match inner.child(side) {
                Some(child) => {
                    f.write_fmt(format_args!(
                        r#"{id} -> {} [label="{side}"];"#,
                        child.index()
                    ))?;
                    self.node_fmt(f, child)?;
                }
                None => {
                    f.write_fmt(format_args!(
                        r#"nil_{id}_{side} [label="" shape=point];{id} -> nil_{id}_{side} [label="{side}"];"#
                    ))?;
                }
            }
        }

        Ok(())
    }
}

impl<K> fmt::Display for Dot<'_, K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("digraph {")?;
        if let Some(root) = self.tree.root {
            self.node_fmt(f, root)?;
        }
        f.write_str("}")
    }
}

impl<K> fmt::Debug for Dot<'_, K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
