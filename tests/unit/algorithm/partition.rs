//! Tests for cut removal and original-segment classification

#[cfg(test)]
mod tests {
    use quiltseam::algorithm::dijkstra::{extract_path, shortest_paths};
    use quiltseam::algorithm::mask::CutType;
    use quiltseam::algorithm::partition::{
        border_candidates, classify_segments, is_diagonal_step, remove_cut,
    };
    use quiltseam::algorithm::seam::{SeamGraph, node_id};

    /// Fully 8-connected `size`x`size` graph with unit weights
    fn full_graph(size: usize) -> SeamGraph {
        let mut graph = SeamGraph::empty(size);
        for node in 0..size * size {
            graph.add_node(node);
        }
        for row in 0..size {
            for col in 0..size {
                for (dr, dc) in [(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0), (1, 1)] {
                    let (Some(nr), Some(nc)) = (row.checked_add_signed(dr), col.checked_add_signed(dc))
                    else {
                        continue;
                    };
                    if nr < size && nc < size {
                        graph.add_edge(node_id(row, col, size), node_id(nr, nc, size), 1);
                    }
                }
            }
        }
        graph
    }

    // Tests diagonal detection needs both coordinates to change
    // Verified by accepting a change in either coordinate
    #[test]
    fn test_is_diagonal_step() {
        assert!(is_diagonal_step(node_id(0, 2, 3), node_id(1, 1, 3), 3));
        assert!(!is_diagonal_step(node_id(0, 1, 3), node_id(1, 1, 3), 3));
        assert!(!is_diagonal_step(node_id(1, 0, 3), node_id(1, 1, 3), 3));
    }

    // Tests an anti-diagonal cut separates the two corners
    // Verified by skipping the bridge edge removal
    #[test]
    fn test_remove_cut_blocks_diagonal_bridges() {
        let graph = full_graph(3);
        // Weights force the path 2 -> 4 -> 6 by making everything else expensive
        let mut weighted = SeamGraph::empty(3);
        for node in graph.nodes() {
            weighted.add_node(node);
        }
        for node in graph.nodes() {
            for edge in graph.edges(node) {
                let cheap = [2, 4, 6].contains(&edge.to);
                weighted.add_edge(node, edge.to, if cheap { 0 } else { 100 });
            }
        }
        let paths = shortest_paths(&weighted, 2);
        let Ok(cut) = extract_path(6, &paths) else {
            unreachable!("corner 6 is reachable");
        };
        assert_eq!(cut.nodes(), &[6, 4, 2]);

        let remaining = remove_cut(&weighted, &cut);

        assert_eq!(remaining.nodes().collect::<Vec<_>>(), vec![0, 1, 3, 5, 7, 8]);
        assert!(remaining.edges(1).iter().all(|edge| edge.to != 5));
        assert!(remaining.edges(7).iter().all(|edge| edge.to != 3));

        let original = classify_segments(&remaining, &[0]);
        assert_eq!(original.iter().collect::<Vec<_>>(), vec![0, 1, 3]);
    }

    // Tests no surviving edge points at a removed node
    // Verified by removing only outgoing edges of cut nodes
    #[test]
    fn test_remove_cut_leaves_no_dangling_edges() {
        let graph = full_graph(4);
        let paths = shortest_paths(&graph, node_id(0, 1, 4));
        let Ok(cut) = extract_path(node_id(3, 1, 4), &paths) else {
            unreachable!("bottom row is reachable");
        };

        let remaining = remove_cut(&graph, &cut);

        for node in remaining.nodes() {
            for edge in remaining.edges(node) {
                assert!(remaining.contains(edge.to), "edge {node} -> {} dangles", edge.to);
            }
        }
        for &node in cut.nodes() {
            assert!(!remaining.contains(node));
        }
        assert_eq!(graph.node_count(), 16);
    }

    // Tests border candidates per cut type
    // Verified by swapping the row and column borders
    #[test]
    fn test_border_candidates() {
        assert_eq!(border_candidates(CutType::Horizontal, 3), vec![0, 3, 6]);
        assert_eq!(border_candidates(CutType::Vertical, 3), vec![0, 1, 2]);
        assert_eq!(border_candidates(CutType::Both, 3), vec![0, 1, 2, 3, 6]);
        assert!(border_candidates(CutType::None, 3).is_empty());
    }

    // Tests every fragment touching a candidate is classified
    // Verified by seeding only from the first candidate
    #[test]
    fn test_classify_segments_multiple_fragments() {
        let mut graph = SeamGraph::empty(3);
        for node in [0, 1, 4, 8] {
            graph.add_node(node);
        }
        graph.add_edge(0, 1, 3);
        graph.add_edge(1, 0, 3);

        let original = classify_segments(&graph, &[2, 0, 8, 1]);

        assert_eq!(original.iter().collect::<Vec<_>>(), vec![0, 1, 8]);
        assert!(!original.contains(4));
    }

    // Tests absent candidates contribute nothing
    // Verified by inserting candidates without checking the graph
    #[test]
    fn test_classify_segments_skips_removed_candidates() {
        let graph = SeamGraph::empty(3);

        assert!(classify_segments(&graph, &[0, 3, 6]).is_empty());
    }
}
