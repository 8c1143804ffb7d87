use ittree::{intersect_tidsets, ItTree, Itemset, NodeId, Tidset};
use rand::prelude::*;

const SEED: u64 = 42;
const TRANSACTIONS: usize = 200;

fn random_tidset(rng: &mut StdRng, density: f64) -> Tidset {
    (0..TRANSACTIONS).filter(|_| rng.gen_bool(density)).collect()
}

/// Random tree of `size` nodes. Each node after the first root either becomes
/// a new root or extends a random earlier node by one fresh item.
fn random_tree(rng: &mut StdRng, size: usize) -> ItTree {
    let mut tree = ItTree::with_capacity(size);
    for id in 0..size {
        let density = rng.gen_range(0.1..0.9);
        let tidset = random_tidset(rng, density);
        if id == 0 || rng.gen_bool(0.1) {
            let root = tree.add_node(Itemset::single(id));
            tree.set_tidset(root, tidset).unwrap();
        } else {
            let parent: NodeId = rng.gen_range(0..id);
            let mut itemset = tree.itemset(parent).unwrap().clone();
            itemset.add_item(id);
            tree.add_child(parent, itemset, tidset).unwrap();
        }
    }
    tree
}

#[test]
fn intersection_is_exact_or_soundly_pruned() {
    let mut rng = StdRng::seed_from_u64(SEED);
    for _ in 0..500 {
        let (da, db) = (rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0));
        let a = random_tidset(&mut rng, da);
        let b = random_tidset(&mut rng, db);
        let min_support = rng.gen_range(0..TRANSACTIONS / 2);
        let exact: Tidset = a.intersection(&b).copied().collect();

        match intersect_tidsets(&a, &b, min_support) {
            Some(common) => assert_eq!(common, exact),
            None => assert!(
                exact.len() < min_support,
                "pruned a union with support {} at threshold {}",
                exact.len(),
                min_support
            ),
        }
    }
}

#[test]
fn intersection_ignores_argument_order_and_layout() {
    let mut rng = StdRng::seed_from_u64(SEED);
    for _ in 0..200 {
        let a = random_tidset(&mut rng, 0.5);
        let b = random_tidset(&mut rng, 0.5);
        let min_support = rng.gen_range(0..TRANSACTIONS / 2);

        // Same contents, different insertion order and capacity.
        let mut shuffled: Vec<_> = a.iter().copied().collect();
        shuffled.shuffle(&mut rng);
        let mut a2 = Tidset::with_capacity(4 * TRANSACTIONS);
        a2.extend(shuffled);

        let expected = intersect_tidsets(&a, &b, min_support);
        assert_eq!(intersect_tidsets(&a2, &b, min_support), expected);
        assert_eq!(intersect_tidsets(&b, &a, min_support), expected);
        assert_eq!(intersect_tidsets(&a, &b, min_support), expected);
    }
}

#[test]
fn parallel_sibling_intersections_match_sequential_ones() {
    let mut rng = StdRng::seed_from_u64(SEED);
    let tree = random_tree(&mut rng, 64);
    let siblings: Vec<NodeId> = (1..tree.len()).collect();

    for min_support in &[0, 10, 50, 100] {
        let parallel = tree.intersect_with_siblings(0, &siblings, *min_support).unwrap();
        let sequential: Vec<_> = siblings
            .iter()
            .map(|&s| tree.intersect(0, s, *min_support).unwrap())
            .collect();
        assert_eq!(parallel, sequential);
    }
}

#[test]
fn propagation_reaches_every_descendant_once() {
    let mut rng = StdRng::seed_from_u64(SEED);
    for _ in 0..20 {
        let mut tree = random_tree(&mut rng, 80);
        let node = rng.gen_range(0..tree.len());
        let extra: usize = rng.gen_range(0..4);
        let replacement: Itemset = (1000..1000 + extra).collect();

        let tidsets: Vec<_> = (0..tree.len())
            .map(|id| tree.tidset(id).unwrap().cloned())
            .collect();
        let links: Vec<_> = (0..tree.len())
            .map(|id| (tree.parent(id).unwrap(), tree.children(id).unwrap().to_vec()))
            .collect();
        let descendants: Vec<_> = tree.descendants(node).unwrap().collect();
        let untouched: Vec<_> = (0..tree.len())
            .filter(|id| !descendants.contains(id))
            .map(|id| tree.itemset(id).unwrap().clone())
            .collect();

        tree.replace_in_children(node, &replacement).unwrap();
        let once: Vec<_> = (0..tree.len())
            .map(|id| tree.itemset(id).unwrap().clone())
            .collect();

        for &id in &descendants {
            assert!(replacement.is_subset_of(tree.itemset(id).unwrap()));
        }
        let after: Vec<_> = (0..tree.len())
            .filter(|id| !descendants.contains(id))
            .map(|id| tree.itemset(id).unwrap().clone())
            .collect();
        assert_eq!(after, untouched);

        tree.replace_in_children(node, &replacement).unwrap();
        for (id, itemset) in once.iter().enumerate() {
            assert_eq!(tree.itemset(id).unwrap(), itemset);
        }

        for (id, tidset) in tidsets.iter().enumerate() {
            assert_eq!(tree.tidset(id).unwrap(), tidset.as_ref());
        }
        for (id, (parent, children)) in links.iter().enumerate() {
            assert_eq!(tree.parent(id).unwrap(), *parent);
            assert_eq!(tree.children(id).unwrap(), children.as_slice());
        }
    }
}

#[test]
fn retained_subtrees_keep_their_shape() {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut tree = random_tree(&mut rng, 100);
    let keep: Vec<NodeId> = tree.roots().step_by(2).collect();
    let kept: Vec<(Itemset, Option<Tidset>)> = keep
        .iter()
        .flat_map(|&root| std::iter::once(root).chain(tree.descendants(root).unwrap()))
        .map(|id| (tree.itemset(id).unwrap().clone(), tree.tidset(id).unwrap().cloned()))
        .collect();

    let remap = tree.retain_subtrees(&keep).unwrap();

    assert_eq!(tree.len(), kept.len());
    let new_roots: Vec<NodeId> = keep.iter().map(|&r| remap[r].unwrap()).collect();
    assert_eq!(tree.roots().collect::<Vec<_>>(), new_roots);
    let walked: Vec<(Itemset, Option<Tidset>)> = new_roots
        .iter()
        .flat_map(|&root| std::iter::once(root).chain(tree.descendants(root).unwrap()))
        .map(|id| (tree.itemset(id).unwrap().clone(), tree.tidset(id).unwrap().cloned()))
        .collect();
    assert_eq!(walked, kept);
}
