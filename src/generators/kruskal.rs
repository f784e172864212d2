use crate::{
    maze::{Cell, CellSeeding, Maze, StepKind, StepObserver, observer::Notifier},
    union_find::UnionFind,
};
use rand::{Rng, seq::SliceRandom};

/// Wall edge between two adjacent cells
#[derive(Debug, Clone, Copy)]
struct Edge {
    cell1: Cell,
    cell2: Cell,
}

/// Randomized Kruskal's algorithm.
///
/// Every wall between adjacent cells is listed once and shuffled; walls are then opened in
/// that order whenever they join two separate components. Returns the union-find that tracked
/// the components, which ends with a single set.
pub fn randomized_kruskal<R: Rng + ?Sized>(
    maze: &mut Maze,
    rng: &mut R,
    observer: Option<&mut dyn StepObserver>,
) -> UnionFind {
    let mut notifier = Notifier::new(maze, observer);
    maze.prepare(CellSeeding::Open);
    notifier.emit(maze, StepKind::Reset);

    let width = maze.width();
    let height = maze.height();

    // Initialize Union-Find for all cells
    let mut uf = UnionFind::new(maze.cell_count());

    // Collect all possible edges (walls between adjacent cells)
    let mut edges: Vec<Edge> = (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .flat_map(|(x, y)| {
            [
                (x + 1 < width).then(|| Edge {
                    cell1: (x, y),
                    cell2: (x + 1, y),
                }),
                (y + 1 < height).then(|| Edge {
                    cell1: (x, y),
                    cell2: (x, y + 1),
                }),
            ]
        })
        .flatten()
        .collect();

    // Shuffle edges randomly
    edges.shuffle(rng);

    let mut skipped: usize = 0;
    for edge in edges {
        // A spanning tree is complete once everything is one component
        if uf.components() == 1 {
            break;
        }

        // Convert cell coordinates to UnionFind indices
        let idx1 = maze.cell_index(edge.cell1);
        let idx2 = maze.cell_index(edge.cell2);

        // If cells are not yet connected, remove the wall between them
        if uf.union(idx1, idx2) {
            maze.carve_between(edge.cell1, edge.cell2);
            notifier.emit(maze, StepKind::Carve);
        } else {
            skipped += 1;
        }
    }
    tracing::debug!(
        "[generate] Kruskal skipped {} walls closing a cycle",
        skipped
    );
    notifier.finish(maze);
    uf
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::get_rng;

    #[test]
    fn test_kruskal_five_by_five() {
        let mut maze = Maze::new(5, 5).unwrap();
        let mut uf = randomized_kruskal(&mut maze, &mut get_rng(Some(42)), None);
        assert_eq!(maze.open_wall_count(), 24);
        assert_eq!(uf.components(), 1);
        assert_eq!(uf.component_size(0), 25);
        assert!(maze.is_perfect());
    }

    #[test]
    fn test_kruskal_single_cell() {
        let mut maze = Maze::new(1, 1).unwrap();
        let uf = randomized_kruskal(&mut maze, &mut get_rng(Some(42)), None);
        assert_eq!(uf.components(), 1);
        assert_eq!(maze.open_wall_count(), 0);
        assert!(maze.is_perfect());
    }
}
