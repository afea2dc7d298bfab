//! Euclidean-2D instance-file parsing.
//!
//! Only the `NODE_COORD_SECTION` region is read; headers such as `NAME`,
//! `DIMENSION`, or `EDGE_WEIGHT_TYPE` are not interpreted.

use crate::{Error, Result, node::Node};

const NODE_COORD_SECTION_MARKER: &str = "NODE_COORD_SECTION";
const EOF_MARKER: &str = "EOF";
const NODE_LINE_FIELDS: usize = 3;

/// Parses the node coordinates out of a EUC_2D instance text.
///
/// The region after the first `NODE_COORD_SECTION` occurrence and before the
/// first `EOF` occurrence is read line by line. A missing `EOF` marker is
/// tolerated and the region extends to the end of the text. Blank lines are
/// skipped; every other line must hold exactly three whitespace-separated
/// fields: declared index, x, y. Nodes are returned in file order.
pub fn parse_node_coords(text: &str) -> Result<Vec<Node>> {
    let Some((_, rest)) = text.split_once(NODE_COORD_SECTION_MARKER) else {
        return Err(Error::format(format!(
            "Missing {NODE_COORD_SECTION_MARKER} marker"
        )));
    };
    let region = match rest.split_once(EOF_MARKER) {
        Some((before, _)) => before,
        None => rest,
    };

    let mut nodes = Vec::new();
    for raw_line in region.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        nodes.push(parse_node_line(line)?);
    }

    Ok(nodes)
}

fn parse_node_line(line: &str) -> Result<Node> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != NODE_LINE_FIELDS {
        return Err(Error::format(format!(
            "Bad node line '{line}': expected {NODE_LINE_FIELDS} fields, got {}",
            fields.len()
        )));
    }

    let idx = fields[0]
        .parse::<i64>()
        .map_err(|e| Error::format(format!("Bad node index '{}': {e}", fields[0])))?;
    let x = fields[1]
        .parse::<f64>()
        .map_err(|e| Error::format(format!("Bad x coordinate '{}': {e}", fields[1])))?;
    let y = fields[2]
        .parse::<f64>()
        .map_err(|e| Error::format(format!("Bad y coordinate '{}': {e}", fields[2])))?;

    Ok(Node::new(idx, x, y))
}

#[cfg(test)]
mod tests {
    use super::parse_node_coords;
    use crate::node::Node;

    const INSTANCE_HEADER: &str = concat!(
        "NAME: triangle\n",
        "TYPE: TSP\n",
        "COMMENT: three points\n",
        "DIMENSION: 3\n",
        "EDGE_WEIGHT_TYPE: EUC_2D\n",
    );

    #[test]
    fn reads_three_field_lines_in_file_order() {
        let text = format!(
            "{INSTANCE_HEADER}NODE_COORD_SECTION\n1 0.0 0.0\n2 3.0 0.0\n3 0.0 4.0\nEOF\n"
        );
        let nodes = parse_node_coords(&text).expect("parse");
        assert_eq!(
            nodes,
            vec![
                Node::new(1, 0.0, 0.0),
                Node::new(2, 3.0, 0.0),
                Node::new(3, 0.0, 4.0),
            ]
        );
    }

    #[test]
    fn skips_blank_and_whitespace_only_lines() {
        let text = "NODE_COORD_SECTION\n\n1 1.0 2.0\n   \n\t\n2 3.0 4.0\nEOF\n";
        let nodes = parse_node_coords(text).expect("parse");
        assert_eq!(nodes.len(), 2);
    }

    #[test]
    fn accepts_tabs_and_repeated_spaces_between_fields() {
        let text = "NODE_COORD_SECTION\n  1\t10.5   20.25\nEOF\n";
        let nodes = parse_node_coords(text).expect("parse");
        assert_eq!(nodes, vec![Node::new(1, 10.5, 20.25)]);
    }

    #[test]
    fn tolerates_missing_eof_marker() {
        let text = "NODE_COORD_SECTION\n1 1.0 1.0\n2 2.0 2.0\n";
        let nodes = parse_node_coords(text).expect("parse");
        assert_eq!(nodes.len(), 2);
    }

    #[test]
    fn ignores_content_after_the_eof_marker() {
        let text = "NODE_COORD_SECTION\n1 1.0 1.0\nEOF\nnot a node line\n";
        let nodes = parse_node_coords(text).expect("parse");
        assert_eq!(nodes.len(), 1);
    }

    #[test]
    fn missing_section_marker_fails() {
        let err = parse_node_coords("NAME: x\nEOF\n").expect_err("marker should be required");
        assert!(err.to_string().contains("Missing NODE_COORD_SECTION"));
    }

    #[test]
    fn empty_section_yields_no_nodes() {
        let nodes = parse_node_coords("NODE_COORD_SECTION\nEOF\n").expect("parse");
        assert!(nodes.is_empty());
    }

    #[test]
    fn rejects_lines_with_too_few_fields() {
        let err = parse_node_coords("NODE_COORD_SECTION\n1 2.0\nEOF\n")
            .expect_err("two fields should fail");
        assert!(err.to_string().contains("expected 3 fields, got 2"));
    }

    #[test]
    fn rejects_lines_with_too_many_fields() {
        let err = parse_node_coords("NODE_COORD_SECTION\n1 2.0 3.0 4.0\nEOF\n")
            .expect_err("four fields should fail");
        assert!(err.to_string().contains("expected 3 fields, got 4"));
    }

    #[test]
    fn rejects_non_integer_node_index() {
        let err = parse_node_coords("NODE_COORD_SECTION\n1.5 2.0 3.0\nEOF\n")
            .expect_err("fractional index should fail");
        assert!(err.to_string().contains("Bad node index '1.5'"));
    }

    #[test]
    fn rejects_non_numeric_coordinates() {
        let err = parse_node_coords("NODE_COORD_SECTION\n1 east 3.0\nEOF\n")
            .expect_err("word coordinate should fail");
        assert!(err.to_string().contains("Bad x coordinate 'east'"));

        let err = parse_node_coords("NODE_COORD_SECTION\n1 2.0 north\nEOF\n")
            .expect_err("word coordinate should fail");
        assert!(err.to_string().contains("Bad y coordinate 'north'"));
    }

    #[test]
    fn keeps_declared_indices_verbatim() {
        let text = "NODE_COORD_SECTION\n10 0.0 0.0\n-3 1.0 1.0\n10 2.0 2.0\nEOF\n";
        let nodes = parse_node_coords(text).expect("parse");
        let indices: Vec<i64> = nodes.iter().map(|node| node.idx).collect();
        assert_eq!(indices, vec![10, -3, 10]);
    }
}
