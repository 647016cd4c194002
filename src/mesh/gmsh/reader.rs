//! MSH 4.1 ASCII reader.
//!
//! Sections are located by their markers and decoded in file order:
//! `$PhysicalNames`, `$Entities`, `$Nodes`, `$Elements`. Each decoder gets
//! its own `LineCursor` and must consume its section exactly.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::{debug, warn};

use crate::mesh::document::{
    GeometricCurve, GeometricPoint, GeometricSurface, Geometry, MeshData, MeshDocument, Node,
    PhysicalEntities, PhysicalGroup, QuadElement,
};
use crate::mesh::node_table::NodeTable;
use crate::types::{ElementId, NodeId};

use super::cursor::{LineCursor, Record};
use super::error::GmshError;
use super::section::{Section, SectionSpan, SectionSpans};

/// Gmsh element types seen in 2D meshes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GmshElementType {
    Line,
    Triangle,
    Quadrilateral,
    Point,
    Other(i32),
}

impl GmshElementType {
    /// Gmsh type code of a 4-node quadrilateral.
    pub const QUADRILATERAL_CODE: i32 = 3;

    /// Gmsh type code.
    pub fn code(&self) -> i32 {
        match self {
            GmshElementType::Line => 1,
            GmshElementType::Triangle => 2,
            GmshElementType::Quadrilateral => Self::QUADRILATERAL_CODE,
            GmshElementType::Point => 15,
            GmshElementType::Other(code) => *code,
        }
    }
}

impl From<i32> for GmshElementType {
    fn from(value: i32) -> Self {
        match value {
            1 => GmshElementType::Line,
            2 => GmshElementType::Triangle,
            Self::QUADRILATERAL_CODE => GmshElementType::Quadrilateral,
            15 => GmshElementType::Point,
            other => GmshElementType::Other(other),
        }
    }
}

/// Read a Gmsh MSH file (format 4.1, ASCII).
///
/// # Arguments
/// * `path` - Path to the MSH file
///
/// # Returns
/// * `Ok(MeshDocument)` - The parsed document
/// * `Err(GmshError)` - If reading or parsing fails
pub fn read_gmsh_mesh(path: &Path) -> Result<MeshDocument, GmshError> {
    let content = fs::read_to_string(path)?;
    parse_gmsh_mesh(&content)
}

/// Parse MSH 4.1 content from a string.
///
/// Element blocks of any type other than 4-node quadrilaterals are
/// skipped. Every node referenced by a kept element must be declared.
pub fn parse_gmsh_mesh(content: &str) -> Result<MeshDocument, GmshError> {
    let lines: Vec<&str> = content.lines().map(str::trim_end).collect();

    if let Some(span) = SectionSpan::find(&lines, Section::MeshFormat)? {
        check_mesh_format(LineCursor::new(&lines, span))?;
    }

    let spans = SectionSpans::locate(&lines)?;

    let physical_entities = decode_physical_names(LineCursor::new(&lines, spans.physical_names))?;
    let geometry = decode_entities(LineCursor::new(&lines, spans.entities))?;
    let nodes = decode_nodes(LineCursor::new(&lines, spans.nodes))?;
    let elements = decode_elements(LineCursor::new(&lines, spans.elements))?;

    let table = NodeTable::from_nodes(&nodes);
    for element in &elements {
        if let Some(&node) = element.nodes.iter().find(|&&n| !table.contains(n)) {
            return Err(GmshError::InvalidNodeReference {
                element: element.id,
                node,
            });
        }
    }

    debug!(
        "Parsed mesh: {} physical groups, {} nodes, {} quadrilaterals",
        physical_entities.len(),
        nodes.len(),
        elements.len()
    );

    Ok(MeshDocument {
        physical_entities,
        geometry,
        mesh: MeshData { nodes, elements },
    })
}

/// Check the `$MeshFormat` header: version 4.x, ASCII.
fn check_mesh_format(mut cursor: LineCursor<'_>) -> Result<(), GmshError> {
    let mut header = cursor.record("format header")?;
    let version: String = header.parse("version")?;
    let file_type: u8 = header.parse("file type")?;

    if !version.starts_with("4.") {
        return Err(GmshError::UnsupportedVersion(version));
    }
    if file_type != 0 {
        return Err(GmshError::UnsupportedVersion(format!("{version} (binary)")));
    }
    Ok(())
}

/// Decode `$PhysicalNames`: a count, then `<dim> <tag> "<name>"` lines.
fn decode_physical_names(mut cursor: LineCursor<'_>) -> Result<PhysicalEntities, GmshError> {
    let mut header = cursor.record("physical name count")?;
    let declared: usize = header.parse("physical name count")?;
    header.finish()?;

    let mut entities = PhysicalEntities::default();
    for mut record in cursor.take(declared)? {
        let dimension: u8 = record.parse("dimension")?;
        let tag: i32 = record.parse("tag")?;
        let raw_name = record.remainder();
        if raw_name.is_empty() {
            return Err(record.malformed("missing physical name"));
        }

        let table = if dimension == 1 {
            &mut entities.curves
        } else {
            &mut entities.surfaces
        };
        if table.iter().any(|g| g.dimension == dimension && g.tag == tag) {
            return Err(record.malformed(format!(
                "duplicate physical tag {tag} for dimension {dimension}"
            )));
        }
        table.push(PhysicalGroup {
            dimension,
            tag,
            name: raw_name.trim_matches('"').to_string(),
        });
    }
    cursor.finish(declared)?;

    debug!(
        "PhysicalNames: {} curve groups, {} surface groups",
        entities.curves.len(),
        entities.surfaces.len()
    );
    Ok(entities)
}

/// A curve or surface record: both share the same self-describing layout.
struct BoundedEntity {
    id: i32,
    bbox: [f64; 6],
    physical_tags: Vec<i32>,
    bounding: Vec<i32>,
}

/// Decode one `<id> <bbox x6> <n> <tags..> <m> <bounds..>` record.
///
/// Both counts are consumed together with their items, so a record
/// either decodes completely or fails on its own line.
fn decode_bounded_entity(mut record: Record<'_>, bound: &str) -> Result<BoundedEntity, GmshError> {
    let id = record.parse("entity id")?;
    let bbox = record.floats::<6>("bounding box coordinate")?;
    let physical_tags = record.counted("physical tag", |r| r.parse("physical tag"))?;
    let bounding = record.counted(bound, |r| r.parse(bound))?;
    record.finish()?;

    Ok(BoundedEntity {
        id,
        bbox,
        physical_tags,
        bounding,
    })
}

/// Decode `$Entities`: point, curve and surface records in that order.
fn decode_entities(mut cursor: LineCursor<'_>) -> Result<Geometry, GmshError> {
    let mut header = cursor.record("entity counts")?;
    let n_points: usize = header.parse("point count")?;
    let n_curves: usize = header.parse("curve count")?;
    let n_surfaces: usize = header.parse("surface count")?;
    let n_volumes: usize = if header.is_empty() {
        0
    } else {
        header.parse("volume count")?
    };
    header.finish()?;

    let mut geometry = Geometry::default();

    for mut record in cursor.take(n_points)? {
        let id = record.parse("point id")?;
        let x = record.parse("point x")?;
        let y = record.parse("point y")?;
        geometry.points.push(GeometricPoint { id, x, y });
    }

    for record in cursor.take(n_curves)? {
        let entity = decode_bounded_entity(record, "bounding point")?;
        geometry.curves.push(GeometricCurve {
            id: entity.id,
            bbox: entity.bbox,
            physical_tags: entity.physical_tags,
            bounding_points: entity.bounding,
        });
    }

    for record in cursor.take(n_surfaces)? {
        let entity = decode_bounded_entity(record, "bounding curve")?;
        geometry.surfaces.push(GeometricSurface {
            id: entity.id,
            bbox: entity.bbox,
            physical_tags: entity.physical_tags,
            bounding_curves: entity.bounding,
        });
    }

    if n_volumes > 0 {
        debug!("Entities: skipping {} volume records", n_volumes);
        cursor.skip(n_volumes)?;
    }

    cursor.finish(n_points + n_curves + n_surfaces + n_volumes)?;

    debug!(
        "Entities: {} points, {} curves, {} surfaces",
        geometry.points.len(),
        geometry.curves.len(),
        geometry.surfaces.len()
    );
    Ok(geometry)
}

/// Decode `$Nodes`.
///
/// Header: `<n_blocks> <n_nodes> <min_tag> <max_tag>`. Blocks are read
/// until both the declared node total and block count are reached.
fn decode_nodes(mut cursor: LineCursor<'_>) -> Result<Vec<Node>, GmshError> {
    let mut header = cursor.record("node header")?;
    let n_blocks: usize = header.parse("entity block count")?;
    let declared: usize = header.parse("node count")?;
    let _min_tag: usize = header.parse("minimum node tag")?;
    let _max_tag: usize = header.parse("maximum node tag")?;
    header.finish()?;

    // Each node takes two lines, so the declared total never needs more.
    let capacity = declared.min(cursor.remaining());
    let mut nodes = Vec::with_capacity(capacity);
    let mut seen = HashSet::with_capacity(capacity);
    let mut blocks = 0;

    while nodes.len() < declared || blocks < n_blocks {
        if cursor.is_exhausted() {
            return Err(if nodes.len() < declared {
                cursor.mismatch(declared, nodes.len())
            } else {
                cursor.mismatch(n_blocks, blocks)
            });
        }
        decode_node_block(&mut cursor, &mut nodes, &mut seen)?;
        blocks += 1;

        if nodes.len() > declared {
            return Err(cursor.mismatch(declared, nodes.len()));
        }
    }

    if blocks != n_blocks {
        return Err(cursor.mismatch(n_blocks, blocks));
    }
    cursor.finish(declared)?;

    debug!("Nodes: {} nodes in {} blocks", nodes.len(), blocks);
    Ok(nodes)
}

/// Decode one node block: header, `count` id lines, `count` coordinate lines.
///
/// A block with zero nodes consumes only its header.
fn decode_node_block(
    cursor: &mut LineCursor<'_>,
    nodes: &mut Vec<Node>,
    seen: &mut HashSet<NodeId>,
) -> Result<(), GmshError> {
    let mut header = cursor.record("node block header")?;
    let entity_dim: u8 = header.parse("entity dimension")?;
    let entity_tag: i32 = header.parse("entity tag")?;
    let parametric: u8 = header.parse("parametric flag")?;
    let count: usize = header.parse("nodes in block")?;
    header.finish()?;

    if count == 0 {
        return Ok(());
    }

    let ids = cursor
        .take(count)?
        .map(|mut record| {
            let id = NodeId::new(record.parse("node id")?);
            record.finish()?;
            Ok(id)
        })
        .collect::<Result<Vec<_>, GmshError>>()?;

    for (id, mut record) in ids.into_iter().zip(cursor.take(count)?) {
        let x = record.parse("x coordinate")?;
        let y = record.parse("y coordinate")?;
        let z = if record.is_empty() {
            0.0
        } else {
            record.parse("z coordinate")?
        };
        if !seen.insert(id) {
            return Err(record.malformed(format!("duplicate node id {}", id.get())));
        }
        // Parametric coordinates follow xyz when the flag is set.
        if parametric == 0 {
            record.finish()?;
        }
        nodes.push(Node {
            id,
            entity_dim,
            entity_tag,
            coords: [x, y, z],
        });
    }
    Ok(())
}

/// Decode `$Elements`, keeping only quadrilateral blocks.
///
/// Header: `<n_blocks> <n_elements> <min_tag> <max_tag>`. Blocks of other
/// types are skipped line by line so later blocks stay aligned.
fn decode_elements(mut cursor: LineCursor<'_>) -> Result<Vec<QuadElement>, GmshError> {
    let mut header = cursor.record("element header")?;
    let n_blocks: usize = header.parse("entity block count")?;
    let declared: usize = header.parse("element count")?;
    let _min_tag: usize = header.parse("minimum element tag")?;
    let _max_tag: usize = header.parse("maximum element tag")?;
    header.finish()?;

    let mut elements = Vec::new();
    let mut total = 0;
    let mut blocks = 0;

    while total < declared || blocks < n_blocks {
        if cursor.is_exhausted() {
            return Err(if total < declared {
                cursor.mismatch(declared, total)
            } else {
                cursor.mismatch(n_blocks, blocks)
            });
        }

        let mut block = cursor.record("element block header")?;
        let entity_dim: u8 = block.parse("entity dimension")?;
        let entity_tag: i32 = block.parse("entity tag")?;
        let element_type = GmshElementType::from(block.parse::<i32>("element type")?);
        let count: usize = block.parse("elements in block")?;
        block.finish()?;

        match element_type {
            GmshElementType::Quadrilateral => {
                for record in cursor.take(count)? {
                    elements.push(decode_quad(record, entity_tag)?);
                }
            }
            GmshElementType::Line | GmshElementType::Point => {
                debug!(
                    "Elements: skipping {} {:?} elements on entity ({}, {})",
                    count, element_type, entity_dim, entity_tag
                );
                cursor.skip(count)?;
            }
            GmshElementType::Triangle | GmshElementType::Other(_) => {
                warn!(
                    "Elements: skipping {} unsupported elements of type {} on entity ({}, {})",
                    count,
                    element_type.code(),
                    entity_dim,
                    entity_tag
                );
                cursor.skip(count)?;
            }
        }

        total += count;
        blocks += 1;

        if total > declared {
            return Err(cursor.mismatch(declared, total));
        }
    }

    if blocks != n_blocks {
        return Err(cursor.mismatch(n_blocks, blocks));
    }
    cursor.finish(declared)?;

    debug!(
        "Elements: kept {} of {} elements in {} blocks",
        elements.len(),
        total,
        blocks
    );
    Ok(elements)
}

/// Decode `<id> <n1> <n2> <n3> <n4>`.
fn decode_quad(mut record: Record<'_>, entity_tag: i32) -> Result<QuadElement, GmshError> {
    let id = ElementId::new(record.parse("element id")?);
    let mut nodes = [NodeId::new(0); 4];
    for node in nodes.iter_mut() {
        *node = NodeId::new(record.parse("element node id")?);
    }
    record.finish()?;
    Ok(QuadElement::new(id, entity_tag, nodes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Unit square: one surface, four boundary curves, one quad declared
    /// as (1, 3, 2, 4).
    const UNIT_SQUARE: &str = r#"$MeshFormat
4.1 0 8
$EndMeshFormat
$PhysicalNames
2
1 1 "curve1"
2 22 "surface"
$EndPhysicalNames
$Entities
4 1 1 0
1 0 0 0 0
2 1 0 0 0
3 1 1 0 0
4 0 1 0 0
1 0 0 0 1 0 0 1 1 2 1 -2
22 0 0 0 1 1 0 1 22 4 1 2 3 4
$EndEntities
$Nodes
2 4 1 4
0 1 0 0
2 22 0 4
1
2
3
4
0 0 0
1 0 0
1 1 0
0 1 0
$EndNodes
$Elements
2 2 1 2
1 1 1 1
1 1 2
2 22 3 1
2 1 3 2 4
$EndElements
"#;

    #[test]
    fn test_parse_unit_square() {
        let doc = parse_gmsh_mesh(UNIT_SQUARE).unwrap();

        assert_eq!(doc.physical_entities.curves.len(), 1);
        assert_eq!(doc.physical_entities.surfaces.len(), 1);
        assert_eq!(doc.physical_entities.curves[0].name, "curve1");
        assert_eq!(doc.physical_entities.surfaces[0].tag, 22);

        assert_eq!(doc.geometry.points.len(), 4);
        assert_eq!(doc.geometry.curves[0].physical_tags, vec![1]);
        assert_eq!(doc.geometry.curves[0].bounding_points, vec![1, -2]);
        assert_eq!(doc.geometry.surfaces[0].bounding_curves, vec![1, 2, 3, 4]);

        assert_eq!(doc.n_nodes(), 4);
        assert_eq!(doc.n_elements(), 1);
        assert_eq!(doc.mesh.elements[0].id, ElementId::new(2));
        assert_eq!(doc.mesh.elements[0].entity_tag, 22);
        assert_eq!(
            doc.mesh.elements[0].nodes,
            [1, 3, 2, 4].map(NodeId::new)
        );
    }

    #[test]
    fn test_node_entity_ownership() {
        let doc = parse_gmsh_mesh(UNIT_SQUARE).unwrap();
        let node = &doc.mesh.nodes[2];
        assert_eq!(node.id, NodeId::new(3));
        assert_eq!(node.entity_dim, 2);
        assert_eq!(node.entity_tag, 22);
        assert_eq!(node.coords, [1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_read_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", UNIT_SQUARE).unwrap();

        let doc = read_gmsh_mesh(file.path()).unwrap();
        assert_eq!(doc.n_elements(), 1);
    }

    #[test]
    fn test_crlf_and_trailing_spaces() {
        let content = UNIT_SQUARE.replace("2 1 3 2 4", "2 1 3 2 4 ").replace('\n', "\r\n");
        let doc = parse_gmsh_mesh(&content).unwrap();
        assert_eq!(doc.n_elements(), 1);
    }

    #[test]
    fn test_physical_name_with_spaces() {
        let content = UNIT_SQUARE.replace("\"surface\"", "\"city limits\"");
        let doc = parse_gmsh_mesh(&content).unwrap();
        assert_eq!(doc.physical_entities.surfaces[0].name, "city limits");
    }

    #[test]
    fn test_missing_section() {
        let start = UNIT_SQUARE.find("$Nodes").unwrap();
        let end = UNIT_SQUARE.find("$Elements").unwrap();
        let content = format!("{}{}", &UNIT_SQUARE[..start], &UNIT_SQUARE[end..]);

        let result = parse_gmsh_mesh(&content);
        assert!(matches!(
            result,
            Err(GmshError::MissingSection(Section::Nodes))
        ));
    }

    #[test]
    fn test_physical_names_count_mismatch() {
        let content = UNIT_SQUARE.replace("$PhysicalNames\n2\n", "$PhysicalNames\n3\n");
        let result = parse_gmsh_mesh(&content);
        assert!(matches!(
            result,
            Err(GmshError::SectionCountMismatch {
                section: Section::PhysicalNames,
                declared: 3,
                found: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_points_declared_but_missing() {
        let content = r#"$PhysicalNames
0
$EndPhysicalNames
$Entities
3 0 0
1 0 0 0 0
2 1 0 0 0
$EndEntities
$Nodes
0 0 0 0
$EndNodes
$Elements
0 0 0 0
$EndElements
"#;
        let result = parse_gmsh_mesh(content);
        assert!(matches!(
            result,
            Err(GmshError::SectionCountMismatch {
                section: Section::Entities,
                declared: 3,
                found: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_curve_with_multiple_physical_tags() {
        let content = UNIT_SQUARE.replace(
            "1 0 0 0 1 0 0 1 1 2 1 -2",
            "1 0 0 0 1 0 0 3 1 5 7 2 1 -2",
        );
        let doc = parse_gmsh_mesh(&content).unwrap();
        let curve = &doc.geometry.curves[0];
        assert_eq!(curve.physical_tags, vec![1, 5, 7]);
        assert_eq!(curve.bounding_points, vec![1, -2]);
        // The surface record right after is still aligned
        assert_eq!(doc.geometry.surfaces[0].id, 22);
    }

    #[test]
    fn test_curve_record_too_short() {
        let content = UNIT_SQUARE.replace("1 0 0 0 1 0 0 1 1 2 1 -2", "1 0 0 0 1 0 0 1 1 2 1");
        match parse_gmsh_mesh(&content) {
            Err(GmshError::MalformedRecord { section, line, .. }) => {
                assert_eq!(section, Section::Entities);
                assert_eq!(line, 14);
            }
            other => panic!("expected MalformedRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_count_node_block() {
        let content = UNIT_SQUARE.replace("$Nodes\n2 4 1 4\n0 1 0 0\n", "$Nodes\n3 4 1 4\n0 1 0 0\n1 1 0 0\n");
        let doc = parse_gmsh_mesh(&content).unwrap();
        assert_eq!(doc.n_nodes(), 4);
        assert_eq!(doc.mesh.nodes[0].id, NodeId::new(1));
    }

    #[test]
    fn test_node_total_mismatch() {
        let content = UNIT_SQUARE.replace("$Nodes\n2 4 1 4\n", "$Nodes\n2 5 1 5\n");
        let result = parse_gmsh_mesh(&content);
        assert!(matches!(
            result,
            Err(GmshError::SectionCountMismatch {
                section: Section::Nodes,
                declared: 5,
                found: 4,
                ..
            })
        ));
    }

    #[test]
    fn test_duplicate_node_id() {
        let content = UNIT_SQUARE.replace("1\n2\n3\n4\n", "1\n2\n3\n3\n");
        let result = parse_gmsh_mesh(&content);
        assert!(matches!(
            result,
            Err(GmshError::MalformedRecord {
                section: Section::Nodes,
                ..
            })
        ));
    }

    #[test]
    fn test_parametric_node_block() {
        let content = UNIT_SQUARE
            .replace("2 22 0 4\n", "2 22 1 4\n")
            .replace(
                "0 0 0\n1 0 0\n1 1 0\n0 1 0\n",
                "0 0 0 0.0\n1 0 0 0.25\n1 1 0 0.5\n0 1 0 0.75\n",
            );
        let doc = parse_gmsh_mesh(&content).unwrap();
        assert_eq!(doc.n_nodes(), 4);
        assert_eq!(doc.mesh.nodes[2].coords, [1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_duplicate_node_id_in_parametric_block() {
        let content = UNIT_SQUARE
            .replace("2 22 0 4\n", "2 22 1 4\n")
            .replace("1\n2\n3\n4\n", "1\n2\n2\n4\n")
            .replace(
                "0 0 0\n1 0 0\n1 1 0\n0 1 0\n",
                "0 0 0 0.0\n1 0 0 0.25\n1 1 0 0.5\n0 1 0 0.75\n",
            );
        match parse_gmsh_mesh(&content) {
            Err(GmshError::MalformedRecord { section, message, .. }) => {
                assert_eq!(section, Section::Nodes);
                assert!(message.contains("duplicate node id 2"));
            }
            other => panic!("expected MalformedRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_huge_node_count_is_a_mismatch() {
        let content = UNIT_SQUARE.replace("$Nodes\n2 4 1 4\n", "$Nodes\n1 18446744073709551615 1 1\n");
        let result = parse_gmsh_mesh(&content);
        assert!(matches!(
            result,
            Err(GmshError::SectionCountMismatch {
                section: Section::Nodes,
                declared: usize::MAX,
                found: 4,
                ..
            })
        ));
    }

    #[test]
    fn test_huge_physical_tag_count_is_malformed() {
        let content = UNIT_SQUARE.replace(
            "1 0 0 0 1 0 0 1 1 2 1 -2",
            "1 0 0 0 1 1 0 4611686018427387904 1",
        );
        match parse_gmsh_mesh(&content) {
            Err(GmshError::MalformedRecord { section, line, .. }) => {
                assert_eq!(section, Section::Entities);
                assert_eq!(line, 14);
            }
            other => panic!("expected MalformedRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_misordered_sections_rejected() {
        // Move $Entities after $Elements
        let start = UNIT_SQUARE.find("$Entities\n").unwrap();
        let end = UNIT_SQUARE.find("$EndEntities\n").unwrap() + "$EndEntities\n".len();
        let content = format!(
            "{}{}{}",
            &UNIT_SQUARE[..start],
            &UNIT_SQUARE[end..],
            &UNIT_SQUARE[start..end]
        );

        let result = parse_gmsh_mesh(&content);
        assert!(matches!(
            result,
            Err(GmshError::MalformedRecord {
                section: Section::Nodes,
                ..
            })
        ));
    }

    #[test]
    fn test_triangles_skipped_without_shifting_blocks() {
        let content = UNIT_SQUARE
            .replace("$Elements\n2 2 1 2\n", "$Elements\n3 4 1 4\n")
            .replace(
                "2 22 3 1\n2 1 3 2 4\n",
                "2 22 2 2\n3 1 2 3\n4 1 3 4\n2 22 3 1\n2 1 3 2 4\n",
            );
        let doc = parse_gmsh_mesh(&content).unwrap();
        assert_eq!(doc.n_elements(), 1);
        assert_eq!(doc.mesh.elements[0].id, ElementId::new(2));
        assert_eq!(doc.mesh.elements[0].nodes, [1, 3, 2, 4].map(NodeId::new));
    }

    #[test]
    fn test_element_total_mismatch() {
        let content = UNIT_SQUARE.replace("$Elements\n2 2 1 2\n", "$Elements\n2 3 1 3\n");
        assert!(matches!(
            parse_gmsh_mesh(&content),
            Err(GmshError::SectionCountMismatch {
                section: Section::Elements,
                ..
            })
        ));
    }

    #[test]
    fn test_invalid_node_reference() {
        let content = UNIT_SQUARE.replace("2 1 3 2 4", "2 1 3 2 9");
        match parse_gmsh_mesh(&content) {
            Err(GmshError::InvalidNodeReference { element, node }) => {
                assert_eq!(element, ElementId::new(2));
                assert_eq!(node, NodeId::new(9));
            }
            other => panic!("expected InvalidNodeReference, got {:?}", other),
        }
    }

    #[test]
    fn test_quad_with_missing_node() {
        let content = UNIT_SQUARE.replace("2 1 3 2 4", "2 1 3 2");
        assert!(matches!(
            parse_gmsh_mesh(&content),
            Err(GmshError::MalformedRecord {
                section: Section::Elements,
                ..
            })
        ));
    }

    #[test]
    fn test_unsupported_version() {
        let content = UNIT_SQUARE.replace("4.1 0 8", "2.2 0 8");
        assert!(matches!(
            parse_gmsh_mesh(&content),
            Err(GmshError::UnsupportedVersion(v)) if v == "2.2"
        ));

        let binary = UNIT_SQUARE.replace("4.1 0 8", "4.1 1 8");
        assert!(matches!(
            parse_gmsh_mesh(&binary),
            Err(GmshError::UnsupportedVersion(_))
        ));
    }

    #[test]
    fn test_mesh_format_is_optional() {
        let start = UNIT_SQUARE.find("$PhysicalNames").unwrap();
        let doc = parse_gmsh_mesh(&UNIT_SQUARE[start..]).unwrap();
        assert_eq!(doc.n_elements(), 1);
    }

    #[test]
    fn test_element_type_codes() {
        assert_eq!(GmshElementType::from(3), GmshElementType::Quadrilateral);
        assert_eq!(GmshElementType::from(15), GmshElementType::Point);
        assert_eq!(GmshElementType::from(4), GmshElementType::Other(4));
        assert_eq!(GmshElementType::Other(4).code(), 4);
        assert_eq!(GmshElementType::Line.code(), 1);
    }
}
