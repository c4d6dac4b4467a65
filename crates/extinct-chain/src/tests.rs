//! End-to-end regression tests for extinct-chain.

#[cfg(test)]
mod integration_tests {
    use crate::config::ExtinctionConfig;
    use crate::pipeline::ExtinctionRun;
    use extinct_graph::Graph;

    fn lines(n: usize, edges: &[(usize, usize)]) -> Vec<String> {
        let g = Graph::from_edges(n, edges).unwrap();
        ExtinctionRun::new(&g)
            .with_config(ExtinctionConfig::default().with_checks(true))
            .run()
            .unwrap()
            .lines()
            .collect()
    }

    fn complete(n: usize) -> Vec<(usize, usize)> {
        (0..n)
            .flat_map(|u| ((u + 1)..n).map(move |v| (u, v)))
            .collect()
    }

    #[test]
    fn test_single_node() {
        assert_eq!(lines(1, &[]), vec![" 1, 1"]);
    }

    #[test]
    fn test_single_edge() {
        assert_eq!(lines(2, &[(0, 1)]), vec![" 1 2, (x+2)/2", " 3, (x+3)/2"]);
    }

    #[test]
    fn test_two_isolated_nodes() {
        assert_eq!(lines(2, &[]), vec![" 1 2, 1", " 3, (3)/2"]);
    }

    #[test]
    fn test_triangle() {
        assert_eq!(
            lines(3, &[(0, 1), (1, 2), (2, 0)]),
            vec![
                " 1 2 4, (2*x^2+3*x+3)/3",
                " 3 5 6, (4*x^2+8*x+9)/6",
                " 7, (4*x^2+8*x+11)/6",
            ]
        );
    }

    #[test]
    fn test_path() {
        assert_eq!(
            lines(3, &[(0, 1), (1, 2)]),
            vec![
                " 1 4, (4*x^4+16*x^3+35*x^2+34*x+12)/(16*x^2+28*x+12)",
                " 2, (2*x^3+7*x^2+14*x+6)/(8*x+6)",
                " 3 6, (4*x^3+16*x^2+35*x+18)/(16*x+12)",
                " 5, (4*x^4+20*x^3+53*x^2+52*x+18)/(16*x^2+28*x+12)",
                " 7, (4*x^4+20*x^3+57*x^2+62*x+22)/(16*x^2+28*x+12)",
            ]
        );
    }

    #[test]
    fn test_complete_graph_collapses_by_weight() {
        assert_eq!(
            lines(4, &complete(4)),
            vec![
                " 1 2 4 8, (3*x^3+4*x^2+3*x+2)/2",
                " 3 5 6 9 10 12, (9*x^3+15*x^2+13*x+9)/6",
                " 7 11 13 14, (18*x^3+30*x^2+29*x+22)/12",
                " 15, (18*x^3+30*x^2+29*x+25)/12",
            ]
        );
    }

    #[test]
    fn test_cycle() {
        assert_eq!(
            lines(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]),
            vec![
                " 1 2 4 8, (2*x^4+5*x^3+7*x^2+8*x+3)/(5*x+3)",
                " 3 6 9 12, (4*x^4+12*x^3+19*x^2+23*x+9)/(10*x+6)",
                " 5 10, (4*x^4+12*x^3+20*x^2+25*x+9)/(10*x+6)",
                " 7 11 13 14, (4*x^4+12*x^3+21*x^2+28*x+11)/(10*x+6)",
                " 15, (8*x^4+24*x^3+42*x^2+61*x+25)/(20*x+12)",
            ]
        );
    }

    #[test]
    fn test_star() {
        let out = lines(4, &[(0, 1), (0, 2), (0, 3)]);
        assert_eq!(out.len(), 7);
        assert_eq!(
            out[0],
            " 1, (3*x^5+16*x^4+40*x^3+69*x^2+52*x+12)/(24*x^2+34*x+12)"
        );
        assert_eq!(
            out[3],
            " 6 10 12, (9*x^6+60*x^5+184*x^4+370*x^3+421*x^2+237*x+54)/(72*x^3+174*x^2+138*x+36)"
        );
        assert_eq!(
            out[6],
            " 15, (9*x^6+60*x^5+193*x^4+439*x^3+554*x^2+331*x+75)/(72*x^3+174*x^2+138*x+36)"
        );
    }

    #[test]
    fn test_duplicate_edges_do_not_change_output() {
        assert_eq!(
            lines(3, &[(0, 1), (1, 0), (1, 2), (0, 1)]),
            lines(3, &[(0, 1), (1, 2)])
        );
    }

    #[test]
    fn test_deterministic() {
        let edges = [(0, 1), (1, 2), (2, 3), (3, 4), (4, 0), (0, 2)];
        assert_eq!(lines(5, &edges), lines(5, &edges));
    }

    #[test]
    fn test_larger_complete_graph() {
        // K5: classes by Hamming weight, every check passes.
        assert_eq!(lines(5, &complete(5)).len(), 5);
    }
}
