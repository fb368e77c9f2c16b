use crate::mesh::WingMesh;

#[cfg(feature = "hashmap")]
use hashbrown::HashMap;
#[cfg(not(feature = "hashmap"))]
use std::collections::HashMap;

impl WingMesh {
    /// Count how often each directed edge `(from, to)` appears across all triangles.
    fn directed_edge_counts(&self) -> HashMap<(u32, u32), u32> {
        let mut edge_counts: HashMap<(u32, u32), u32> = HashMap::new();
        for [a, b, c] in self.triangles() {
            for edge in [(a, b), (b, c), (c, a)] {
                *edge_counts.entry(edge).or_insert(0) += 1;
            }
        }
        edge_counts
    }

    /// Checks if the mesh is a closed surface
    ///
    /// ### Returns
    /// Returns `true` if every edge is shared by exactly 2 triangles
    ///
    /// ### Notes:
    /// - Edges are compared by vertex index, not position, so coincident but
    ///   distinct vertices do not stitch two triangles together.
    pub fn is_closed(&self) -> bool {
        let mut undirected: HashMap<(u32, u32), u32> = HashMap::new();
        for ((from, to), count) in self.directed_edge_counts() {
            *undirected.entry((from.min(to), from.max(to))).or_insert(0) += count;
        }
        !undirected.is_empty() && undirected.values().all(|&count| count == 2)
    }

    /// Checks that neighbouring triangles agree on orientation
    ///
    /// ### Returns
    /// Returns `true` if the mesh is closed and every directed edge is used
    /// exactly once, i.e. each shared edge is traversed in opposite directions.
    pub fn has_consistent_winding(&self) -> bool {
        self.is_closed() && self.directed_edge_counts().values().all(|&count| count == 1)
    }
}

#[cfg(test)]
mod tests {
    use crate::mesh::WingMesh;
    use nalgebra::Point3;

    #[test]
    fn open_and_closed() {
        let vertices = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
        ];
        let closed =
            WingMesh::from_triangles(&vertices, &[[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]]);
        assert!(closed.is_closed());
        assert!(closed.has_consistent_winding());

        let open = WingMesh::from_triangles(&vertices, &[[0, 2, 1], [0, 1, 3], [0, 3, 2]]);
        assert!(!open.is_closed());

        let flipped =
            WingMesh::from_triangles(&vertices, &[[0, 1, 2], [0, 1, 3], [0, 3, 2], [1, 2, 3]]);
        assert!(flipped.is_closed());
        assert!(!flipped.has_consistent_winding());
    }
}
