//! Property-based tests for the extinction-time pipeline.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::pipeline::ExtinctionRun;
    use extinct_graph::Graph;

    // Strategy for small graphs: node count 1-4 and a random edge subset.
    fn small_graph() -> impl Strategy<Value = Graph> {
        (1usize..=4).prop_flat_map(|n| {
            let pairs: Vec<(usize, usize)> = (0..n)
                .flat_map(|u| ((u + 1)..n).map(move |v| (u, v)))
                .collect();
            proptest::sample::subsequence(pairs.clone(), 0..=pairs.len())
                .prop_map(move |edges| Graph::from_edges(n, &edges).unwrap())
        })
    }

    // A graph together with a permutation of its nodes.
    fn graph_and_perm() -> impl Strategy<Value = (Graph, Vec<usize>)> {
        small_graph().prop_flat_map(|g| {
            let n = g.num_nodes();
            (Just(g), Just((0..n).collect::<Vec<_>>()).prop_shuffle())
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn partition_is_complete((g, _) in graph_and_perm()) {
            let partition = ExtinctionRun::new(&g).classify();
            let total: usize = partition.classes().iter().map(|c| c.len()).sum();
            prop_assert_eq!(total, (1usize << g.num_nodes()) - 1);
            for class in partition.classes() {
                prop_assert_eq!(class.representative(), class.members()[0]);
            }
        }

        #[test]
        fn denominators_are_positive((g, _) in graph_and_perm()) {
            let report = ExtinctionRun::new(&g).run().unwrap();
            for result in &report.classes {
                prop_assert_eq!(result.time.denominator().leading_sign(), 1);
            }
        }

        #[test]
        fn connected_graphs_have_degree_gap((g, _) in graph_and_perm()) {
            prop_assume!(g.is_connected());
            let expected = g.num_nodes() as i64 - 1;
            let report = ExtinctionRun::new(&g).run().unwrap();
            for result in &report.classes {
                prop_assert_eq!(result.time.degree_gap(), expected);
            }
        }

        #[test]
        fn relabeling_preserves_times((g, perm) in graph_and_perm()) {
            // The extinction time of a state equals that of its image in
            // the relabeled graph.
            let h = g.relabel(&perm);
            let before = ExtinctionRun::new(&g).run().unwrap();
            let after = ExtinctionRun::new(&h).run().unwrap();
            let after_partition = ExtinctionRun::new(&h).classify();

            prop_assert_eq!(before.len(), after.len());
            for result in &before.classes {
                for &state in result.class.members() {
                    let image = state.relabel(&perm);
                    let class = after_partition.class_of(image).unwrap();
                    let a = &result.time;
                    let b = &after.classes[class].time;
                    // Same rational function: a.num * b.den == b.num * a.den
                    prop_assert_eq!(
                        a.numerator().mul(b.denominator()),
                        b.numerator().mul(a.denominator())
                    );
                }
            }
        }
    }
}
