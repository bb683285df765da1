//! Example: Drawing glyphs and graphs by hand
//!
//! Builds the branch-program figure, a row of small control-flow graphs
//! composed from glyphs, followed by the path tree of the first graph.
//! The SVG is written to the path given as the first argument, or printed.

use cfgdraw::{
    DiagramBuilder, RenderMode,
    config::AppConfig,
    geometry::Vector,
    glyph::{Arrow, ChainDirection, Ellipsis, Loop, Node, Representation},
    graph::{Edge, Graph, Vertex},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let builder = DiagramBuilder::new(AppConfig::default());

    // A branch: 0 -> {1, 2}, both terminal
    let mut graph = Graph::new();
    graph.add_vertices([
        Vertex::new("0", Vector::new(6.0, 2.0)),
        Vertex::new("1", Vector::new(2.0, 6.0)).with_terminal(true),
        Vertex::new("2", Vector::new(10.0, 6.0)).with_terminal(true),
    ])?;
    graph.add_edges([Edge::new("0", "1"), Edge::new("0", "2")])?;

    let mut figure = builder.representation(&graph, RenderMode::Direct)?;

    // The two feasible paths drawn as free glyphs
    let (top, bottom) = (Vector::new(16.0, 2.0), Vector::new(16.0, 7.0));
    figure.add(Node::new(top, "0"));
    figure.add(Node::new(bottom, "1").with_terminal(true));
    figure.add(Arrow::new(top, bottom)?);
    figure.add(Loop::new(bottom));

    // An infeasible continuation and a sequence that goes on
    let (top, bottom) = (Vector::new(21.0, 2.0), Vector::new(21.0, 7.0));
    figure.add(Node::new(top, "0"));
    figure.add(Node::new(bottom, "2").with_feasible(false));
    figure.add(Arrow::new(top, bottom)?.with_feasible(false));

    figure.add_chain(
        Vector::new(26.0, 2.0),
        &["0", "1", "3"],
        ChainDirection::Horizontal,
        true,
    )?;
    figure.add(Ellipsis::new(Vector::new(39.0, 4.0), Vector::new(1.0, 0.0))?);

    let paths = builder.representation(
        &graph,
        RenderMode::Paths {
            origin: Vector::new(0.0, 12.0),
        },
    )?;
    figure.append(paths);

    let document = builder.document(&figure)?;
    match std::env::args().nth(1) {
        Some(path) => {
            document.save(&path)?;
            println!("Wrote {path}");
        }
        None => println!("{}", document.to_svg_string()),
    }

    Ok(())
}
