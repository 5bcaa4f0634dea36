#![allow(clippy::unwrap_used)]

use dendro::BinaryTree;
use proptest::prelude::*;

/// Left-leaning tree over `labels`, built by repeated merges.
fn chain(labels: std::ops::Range<u32>) -> BinaryTree<u32> {
    let mut tree = BinaryTree::new();
    let mut labels = labels;
    tree.create_root(labels.next().unwrap()).unwrap();
    for label in labels {
        let mut leaf = BinaryTree::new();
        leaf.create_root(label).unwrap();
        tree.merge_trees(&mut leaf, u32::MAX).unwrap();
    }
    tree
}

fn leaf_labels(tree: &BinaryTree<u32>) -> Vec<u32> {
    let mut out = Vec::new();
    tree.map_leaves(tree.root(), |d| out.push(*d));
    out
}

proptest! {
    #[test]
    fn merge_trees_is_additive(left_n in 1u32..20, right_n in 1u32..20) {
        let mut left = chain(0..left_n);
        let mut right = chain(100..100 + right_n);
        let (left_size, right_size) = (left.len(), right.len());

        let root = left.merge_trees(&mut right, u32::MAX).unwrap();

        prop_assert_eq!(left.len(), left_size + right_size + 1);
        prop_assert!(right.is_empty());
        prop_assert_eq!(left.root(), Some(root));
        prop_assert_eq!(left.preorder(left.root()).count(), left.len());

        let expected: Vec<u32> = (0..left_n).chain(100..100 + right_n).collect();
        prop_assert_eq!(leaf_labels(&left), expected);

        for (node, _) in left.preorder(left.root()) {
            for child in [left.left(node), left.right(node)].into_iter().flatten() {
                prop_assert_eq!(left.parent(child), Some(node));
            }
        }
    }
}
