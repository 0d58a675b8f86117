use crate::bbox::BoundingBox;
use crate::kdtree::{KDTree, KDTreeBuilder, Node, DEFAULT_LEAF_SIZE};
use crate::test::{random_points, scattered_x, scattered_y};
use crate::{NearestNeighborIndex, NearestNeighborsError, Number};

/// Walk the tree checking structural invariants. Returns the leaves in traversal order.
fn check_node<'a, N: Number>(
    node: Node<'a, N>,
    x: &[N],
    y: &[N],
    leaf_size: usize,
    leaves: &mut Vec<&'a [usize]>,
) {
    let indices = node.indices();
    assert!(!indices.is_empty());
    assert_eq!(
        node.bbox(),
        BoundingBox::from_points(x, y, indices),
        "bounding box is not tight"
    );

    if node.is_leaf() {
        assert!(indices.len() <= leaf_size, "leaf holds {} points", indices.len());
        assert!(node.axis().is_none());
        leaves.push(indices);
        return;
    }

    assert!(node.is_parent());
    let left = node.left_child().unwrap();
    let right = node.right_child().unwrap();
    assert!(left.indices().len() >= right.indices().len());
    assert_eq!(left.indices().len() + right.indices().len(), indices.len());

    // The split axis is the wider one and separates the children
    let axis = node.axis().unwrap();
    assert_eq!(axis, node.bbox().widest_axis());
    assert!(left.bbox().maxes()[axis] <= right.bbox().mins()[axis]);

    check_node(left, x, y, leaf_size, leaves);
    check_node(right, x, y, leaf_size, leaves);
}

fn check_tree<N: Number>(tree: &KDTree<'_, N>, x: &[N], y: &[N]) {
    let mut leaves = vec![];
    check_node(tree.root(), x, y, tree.leaf_size(), &mut leaves);
    assert_eq!(leaves.len(), tree.num_leaves());

    // every point lands in exactly one leaf
    let mut seen = vec![0usize; x.len()];
    for leaf in leaves {
        for &i in leaf {
            seen[i] += 1;
        }
    }
    assert!(seen.iter().all(|&count| count == 1));
}

#[test]
fn one_point() {
    let tree = KDTree::try_new(&[0], &[0]).unwrap();
    let (indices, distances) = tree.knn(0, 0, 1);
    assert_eq!(indices, vec![0]);
    assert_eq!(distances, vec![0.]);
}

#[test]
fn one_point_exact_distance() {
    let tree = KDTree::try_new(&[1.5], &[-2.]).unwrap();
    let (indices, distances) = tree.knn(4.5, 2., 1);
    assert_eq!(indices, vec![0]);
    assert_eq!(distances, vec![5.]);
}

#[test]
fn two_points() {
    let tree = KDTree::try_new(&[-1, 1], &[-1, 1]).unwrap();
    let (indices, distances) = tree.knn(-1, -1, 1);
    assert_eq!(indices, vec![0]);
    assert_eq!(distances, vec![0.]);
}

#[test]
fn knn_few_points() {
    let x = [0.291848, 0.289646];
    let y = [0.618058, 0.219093];
    let tree = KDTree::try_new(&x, &y).unwrap();
    let (indices, distances) = tree.knn(1., 1., 1);
    assert_eq!(indices, vec![0]);
    assert!((distances[0] - 0.8045861957975665).abs() < 1e-6);

    let x = [0.556478, 0.543232, 0.72787, 0.721939, 0.566468];
    let y = [0.561301, 0.135792, 0.420113, 0.0294034, 0.96774];
    let tree = KDTree::try_new(&x, &y).unwrap();
    let (indices, distances) = tree.knn(0.5, 0.5, 2);
    assert_eq!(indices, vec![0, 2]);
    assert!((distances[0] - 0.08335212705744233).abs() < 1e-6);
    assert!((distances[1] - 0.24146774043130484).abs() < 1e-6);
}

#[test]
fn knn_ten_points() {
    let (x, y) = (scattered_x(), scattered_y());
    let tree = KDTree::try_new(&x, &y).unwrap();
    let (indices, distances) = tree.knn(1., 1., 5);

    assert_eq!(indices, vec![9, 5, 3, 8, 0]);
    let expected = [
        0.21458367562328687,
        0.9013388815534366,
        1.45001117747416,
        1.825422236333282,
        1.834855202963983,
    ];
    for (got, want) in distances.iter().zip(expected) {
        assert!((got - want).abs() < 1e-6, "{} != {}", got, want);
    }
}

#[test]
fn knn_ten_points_split_tree() {
    // Same data, but small leaves force the pruned descent
    let (x, y) = (scattered_x(), scattered_y());
    let tree = KDTreeBuilder::new_with_leaf_size(&x, &y, 2)
        .finish()
        .unwrap();
    assert!(tree.depth() > 0);

    let (indices, _) = tree.knn(1., 1., 5);
    assert_eq!(indices, vec![9, 5, 3, 8, 0]);
}

#[test]
fn knn_k_at_least_n_returns_everything_sorted() {
    let (x, y) = random_points(5, 57);
    let tree = KDTree::try_new(&x, &y).unwrap();

    for k in [57, 58, 1000] {
        let (indices, distances) = tree.knn(0., 0., k);
        assert_eq!(indices.len(), 57);
        assert!(distances.windows(2).all(|w| w[0] <= w[1]));

        let mut all = indices.clone();
        all.sort_unstable();
        assert_eq!(all, (0..57).collect::<Vec<_>>());
    }
}

#[test]
fn knn_zero_is_empty() {
    let (x, y) = random_points(6, 40);
    let tree = KDTree::try_new(&x, &y).unwrap();
    assert_eq!(tree.knn(0., 0., 0), (vec![], vec![]));
}

#[test]
fn within_radius() {
    let (x, y) = (scattered_x(), scattered_y());
    for leaf_size in [DEFAULT_LEAF_SIZE, 1, 3] {
        let tree = KDTreeBuilder::new_with_leaf_size(&x, &y, leaf_size)
            .finish()
            .unwrap();

        let mut result = tree.within(5., 5., 3.14).unwrap();
        result.sort_unstable();
        assert_eq!(result, vec![2, 4, 7]);

        let mut result = tree.within(1., 1., 5.).unwrap();
        result.sort_unstable();
        assert_eq!(result, (0..10).collect::<Vec<_>>());

        assert_eq!(tree.within(2.5, 2.5, 1.).unwrap(), vec![8]);
    }
}

#[test]
fn within_is_inclusive() {
    let tree = KDTreeBuilder::new_with_leaf_size(&[0, 3, 6, 9], &[0, 4, 8, 12], 1)
        .finish()
        .unwrap();
    let mut result = tree.within(0, 0, 5.).unwrap();
    result.sort_unstable();
    assert_eq!(result, vec![0, 1]);
    assert_eq!(tree.within(0, 0, 0.).unwrap(), vec![0]);
    assert!(tree.within(100, 100, 1.).unwrap().is_empty());
}

#[test]
fn within_rejects_bad_radius() {
    let tree = KDTree::try_new(&[0., 1.], &[0., 1.]).unwrap();
    assert!(matches!(
        tree.within(0., 0., -1.),
        Err(NearestNeighborsError::InvalidArgument(_))
    ));
    assert!(tree.within(0., 0., f64::NAN).is_err());
}

#[test]
fn within_rejects_non_finite_query() {
    let (x, y) = (scattered_x(), scattered_y());
    let tree = KDTreeBuilder::new_with_leaf_size(&x, &y, 2)
        .finish()
        .unwrap();
    assert!(matches!(
        tree.within(f64::NAN, 5., 3.14),
        Err(NearestNeighborsError::InvalidArgument(_))
    ));
    assert!(tree.within(5., f64::INFINITY, 3.14).is_err());
    assert!(tree.within(f64::NEG_INFINITY, 5., f64::INFINITY).is_err());
}

#[test]
#[should_panic(expected = "non-finite")]
fn knn_panics_on_nan_query() {
    let (x, y) = (scattered_x(), scattered_y());
    let tree = KDTree::try_new(&x, &y).unwrap();
    tree.knn(f64::NAN, 5., 3);
}

#[test]
#[should_panic(expected = "non-finite")]
fn knn_panics_on_infinite_query_in_split_tree() {
    let (x, y) = (scattered_x(), scattered_y());
    let tree = KDTreeBuilder::new_with_leaf_size(&x, &y, 2)
        .finish()
        .unwrap();
    tree.knn(1., f64::INFINITY, 0);
}

#[test]
fn coord_queries() {
    let (x, y) = (scattered_x(), scattered_y());
    let tree = KDTree::try_new(&x, &y).unwrap();

    let (indices, _) = tree.knn_coord(&(1., 1.), 2);
    assert_eq!(indices, vec![9, 5]);

    let mut result = tree.within_coord(&(5., 5.), 3.14).unwrap();
    result.sort_unstable();
    assert_eq!(result, vec![2, 4, 7]);
}

#[test]
fn construction_errors() {
    let empty: Vec<f64> = vec![];
    assert_eq!(
        KDTree::try_new(&empty, &[1.]).unwrap_err(),
        NearestNeighborsError::EmptyInput
    );
    assert_eq!(
        KDTree::try_new(&[1.], &empty).unwrap_err(),
        NearestNeighborsError::EmptyInput
    );
    assert_eq!(
        KDTree::try_new(&[1., 2.], &[1.]).unwrap_err(),
        NearestNeighborsError::LengthMismatch { x_len: 2, y_len: 1 }
    );
    assert!(matches!(
        KDTreeBuilder::new_with_leaf_size(&[1.], &[1.], 0).finish(),
        Err(NearestNeighborsError::InvalidArgument(_))
    ));
    assert!(matches!(
        KDTree::try_new(&[1., f64::NAN], &[1., 2.]),
        Err(NearestNeighborsError::InvalidArgument(_))
    ));
}

#[test]
fn shape_for_representative_sizes() {
    // (n, leaves, depth, points in the root's left subtree)
    let cases = [
        (5, 1, 0, None),
        (10, 1, 0, None),
        (11, 2, 1, Some(10)),
        (20, 2, 1, Some(10)),
        (100, 10, 4, Some(60)),
        (1000, 100, 7, Some(640)),
    ];

    for (n, leaves, depth, left) in cases {
        let (x, y) = random_points(n as u64, n);
        let tree = KDTree::try_new(&x, &y).unwrap();

        assert_eq!(tree.leaf_size(), DEFAULT_LEAF_SIZE);
        assert_eq!(tree.num_leaves(), leaves, "n = {}", n);
        assert_eq!(tree.num_nodes(), 2 * leaves - 1, "n = {}", n);
        assert_eq!(tree.depth(), depth, "n = {}", n);
        assert_eq!(
            tree.root().left_child().map(|node| node.indices().len()),
            left,
            "n = {}",
            n
        );
        check_tree(&tree, &x, &y);
    }
}

#[test]
fn depth_is_logarithmic() {
    for leaf_size in [1, 4, 10] {
        for n in [1, 2, 9, 33, 127, 128, 129, 513, 2049] {
            let (x, y) = random_points(n as u64 + leaf_size as u64, n);
            let tree = KDTreeBuilder::new_with_leaf_size(&x, &y, leaf_size)
                .finish()
                .unwrap();

            let num_leaves = n.div_ceil(leaf_size);
            let expected_depth = num_leaves.next_power_of_two().trailing_zeros() as usize;
            assert_eq!(tree.num_leaves(), num_leaves);
            assert_eq!(tree.depth(), expected_depth, "n = {}", n);
            check_tree(&tree, &x, &y);
        }
    }
}

#[test]
fn duplicate_coordinates() {
    // Every point identical: spreads are zero and partitioning falls back to index order
    let x = vec![3; 45];
    let y = vec![-2; 45];
    let tree = KDTree::try_new(&x, &y).unwrap();
    check_tree(&tree, &x, &y);
    assert_eq!(tree.num_leaves(), 5);

    let (indices, distances) = tree.knn(3, -2, 4);
    assert_eq!(indices.len(), 4);
    assert!(distances.iter().all(|&d| d == 0.));
    assert_eq!(tree.within(3, -2, 0.).unwrap().len(), 45);
}

#[test]
fn equal_coordinates_split_by_index() {
    // Two outliers give the x axis all the spread, so the split runs through a block of equal
    // coordinates and the lower indices go left
    let mut x = vec![0.; 20];
    x[0] = -1.;
    x[19] = 1.;
    let y = vec![0.; 20];
    let tree = KDTreeBuilder::new_with_leaf_size(&x, &y, 10)
        .finish()
        .unwrap();

    let root = tree.root();
    assert_eq!(root.axis(), Some(0));
    let mut left = root.left_child().unwrap().indices().to_vec();
    left.sort_unstable();
    assert_eq!(left, (0..10).collect::<Vec<_>>());
    let mut right = root.right_child().unwrap().indices().to_vec();
    right.sort_unstable();
    assert_eq!(right, (10..20).collect::<Vec<_>>());
}

#[test]
fn splits_along_wider_axis() {
    // Tall point cloud: the root must split on y
    let x: Vec<i32> = (0..30).map(|i| i % 3).collect();
    let y: Vec<i32> = (0..30).map(|i| i * 10).collect();
    let tree = KDTree::try_new(&x, &y).unwrap();
    assert_eq!(tree.root().axis(), Some(1));

    // Square bounding box: ties prefer x
    let x = [0, 10, 0, 10, 5, 5, 1, 2, 3, 4, 6, 7];
    let y = [0, 10, 10, 0, 5, 6, 7, 8, 9, 1, 2, 3];
    let tree = KDTree::try_new(&x, &y).unwrap();
    assert_eq!(tree.root().axis(), Some(0));
}

#[test]
fn single_leaf_tree() {
    let tree = KDTree::try_new(&[4u16, 8, 15], &[16u16, 23, 42]).unwrap();
    let root = tree.root();
    assert!(root.is_leaf());
    assert!(root.left_child().is_none());
    assert!(root.right_child().is_none());
    assert_eq!(root.indices(), &[0, 1, 2]);
    assert_eq!(root.bbox().mins(), [4., 16.]);
    assert_eq!(root.bbox().maxes(), [15., 42.]);
    assert_eq!(tree.depth(), 0);
}
