//! Printing graphs in GraphViz `dot` format via a `VizDotGraph` trait.
//! Entirely a debugging convenience — the matching core never calls into
//! this module.

use std::fmt::Debug;

use super::{ArenaGraph, Graph};

/// Graphs that know how to render themselves as GraphViz `dot` source (and,
/// with the `svg` feature, rasterize that to an `.svg` file).
pub trait VizDotGraph: Graph {
    /// Renders this graph as `dot` source.
    fn print(&self) -> String;

    /// Renders this graph to an `.svg` file at `path`.
    ///
    /// Requires the `svg` feature and a `dot` executable on `PATH`.
    #[cfg(feature = "svg")]
    fn print_to_svg(&self, path: &str) -> Result<String, std::io::Error>;
}

impl<VertexLabel, EdgeLabel> VizDotGraph for ArenaGraph<VertexLabel, EdgeLabel>
where
    VertexLabel: Debug,
    EdgeLabel: Debug,
{
    fn print(&self) -> String {
        let mut out = String::from("graph molmatch {\n");
        for &v in self.vertices() {
            out.push_str(&format!(
                "    {} [label=\"{:?}\"];\n",
                v.index(),
                self.vertex_label(v)
            ));
        }
        let mut seen = std::collections::HashSet::new();
        for &v in self.vertices() {
            for &(e, other) in self.edges_of(v) {
                if seen.insert(e) {
                    out.push_str(&format!(
                        "    {} -- {} [label=\"{:?}\"];\n",
                        v.index(),
                        other.index(),
                        self.edge_label(e)
                    ));
                }
            }
        }
        out.push_str("}\n");
        out
    }

    #[cfg(feature = "svg")]
    fn print_to_svg(&self, path: &str) -> Result<String, std::io::Error> {
        use graphviz_rust::cmd::{CommandArg, Format};
        graphviz_rust::exec_dot(
            self.print(),
            vec![
                CommandArg::Format(Format::Svg),
                CommandArg::Output(path.to_string()),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::ArenaGraphBuilder;

    #[test]
    fn renders_vertices_and_edges() {
        let mut b = ArenaGraphBuilder::<&str, u8>::new();
        let c = b.add_vertex("C");
        let o = b.add_vertex("O");
        b.add_edge(c, o, 2);
        let g = b.build();

        let dot = g.print();
        assert!(dot.contains("\"C\""));
        assert!(dot.contains("\"O\""));
        assert!(dot.contains("--"));
    }
}
