//! MSH 4.1 ASCII writer.
//!
//! Writes a `MeshDocument` back into the sectioned format. Nodes and
//! elements are grouped into blocks of consecutive records sharing the
//! same owning entity, so reading the output reproduces the document.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::mesh::document::{MeshDocument, Node, QuadElement};

use super::error::GmshError;
use super::reader::GmshElementType;

/// Write a mesh document to an MSH 4.1 file.
///
/// # Arguments
/// * `doc` - The document to write
/// * `path` - Output file path
pub fn write_gmsh_mesh(doc: &MeshDocument, path: &Path) -> Result<(), GmshError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write!(writer, "{}", MshText(doc))?;
    writer.flush()?;
    Ok(())
}

/// Format a mesh document as MSH 4.1 text.
pub fn format_gmsh_mesh(doc: &MeshDocument) -> String {
    MshText(doc).to_string()
}

struct MshText<'a>(&'a MeshDocument);

impl fmt::Display for MshText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let doc = self.0;

        writeln!(f, "$MeshFormat")?;
        writeln!(f, "4.1 0 8")?;
        writeln!(f, "$EndMeshFormat")?;

        write_physical_names(f, doc)?;
        write_entities(f, doc)?;
        write_nodes(f, &doc.mesh.nodes)?;
        write_elements(f, &doc.mesh.elements)
    }
}

fn write_physical_names(f: &mut fmt::Formatter<'_>, doc: &MeshDocument) -> fmt::Result {
    writeln!(f, "$PhysicalNames")?;
    writeln!(f, "{}", doc.physical_entities.len())?;
    for group in doc.physical_entities.iter() {
        writeln!(f, "{} {} \"{}\"", group.dimension, group.tag, group.name)?;
    }
    writeln!(f, "$EndPhysicalNames")
}

fn write_entities(f: &mut fmt::Formatter<'_>, doc: &MeshDocument) -> fmt::Result {
    let geometry = &doc.geometry;

    writeln!(f, "$Entities")?;
    writeln!(
        f,
        "{} {} {} 0",
        geometry.points.len(),
        geometry.curves.len(),
        geometry.surfaces.len()
    )?;

    // Points: tag x y z n_physical_tags
    for point in &geometry.points {
        writeln!(f, "{} {} {} 0 0", point.id, point.x, point.y)?;
    }
    for curve in &geometry.curves {
        write_bounded_entity(f, curve.id, &curve.bbox, &curve.physical_tags, &curve.bounding_points)?;
    }
    for surface in &geometry.surfaces {
        write_bounded_entity(
            f,
            surface.id,
            &surface.bbox,
            &surface.physical_tags,
            &surface.bounding_curves,
        )?;
    }
    writeln!(f, "$EndEntities")
}

fn write_bounded_entity(
    f: &mut fmt::Formatter<'_>,
    id: i32,
    bbox: &[f64; 6],
    physical_tags: &[i32],
    bounding: &[i32],
) -> fmt::Result {
    write!(f, "{}", id)?;
    for value in bbox {
        write!(f, " {}", value)?;
    }
    write!(f, " {}", physical_tags.len())?;
    for tag in physical_tags {
        write!(f, " {}", tag)?;
    }
    write!(f, " {}", bounding.len())?;
    for id in bounding {
        write!(f, " {}", id)?;
    }
    writeln!(f)
}

/// Split `items` into runs of consecutive entries with the same key.
fn blocks_by<T, K: PartialEq>(items: &[T], key: impl Fn(&T) -> K) -> Vec<&[T]> {
    let mut blocks = Vec::new();
    let mut start = 0;
    for i in 1..=items.len() {
        if i == items.len() || key(&items[i]) != key(&items[start]) {
            blocks.push(&items[start..i]);
            start = i;
        }
    }
    blocks
}

fn write_nodes(f: &mut fmt::Formatter<'_>, nodes: &[Node]) -> fmt::Result {
    let blocks = blocks_by(nodes, |n| (n.entity_dim, n.entity_tag));
    let min_tag = nodes.iter().map(|n| n.id.get()).min().unwrap_or(0);
    let max_tag = nodes.iter().map(|n| n.id.get()).max().unwrap_or(0);

    writeln!(f, "$Nodes")?;
    writeln!(f, "{} {} {} {}", blocks.len(), nodes.len(), min_tag, max_tag)?;
    for block in blocks {
        let first = &block[0];
        writeln!(f, "{} {} 0 {}", first.entity_dim, first.entity_tag, block.len())?;
        for node in block {
            writeln!(f, "{}", node.id.get())?;
        }
        for node in block {
            let [x, y, z] = node.coords;
            writeln!(f, "{} {} {}", x, y, z)?;
        }
    }
    writeln!(f, "$EndNodes")
}

fn write_elements(f: &mut fmt::Formatter<'_>, elements: &[QuadElement]) -> fmt::Result {
    let blocks = blocks_by(elements, |e| e.entity_tag);
    let min_tag = elements.iter().map(|e| e.id.get()).min().unwrap_or(0);
    let max_tag = elements.iter().map(|e| e.id.get()).max().unwrap_or(0);

    writeln!(f, "$Elements")?;
    writeln!(f, "{} {} {} {}", blocks.len(), elements.len(), min_tag, max_tag)?;
    for block in blocks {
        writeln!(
            f,
            "2 {} {} {}",
            block[0].entity_tag,
            GmshElementType::Quadrilateral.code(),
            block.len()
        )?;
        for element in block {
            let [n1, n2, n3, n4] = element.nodes;
            writeln!(
                f,
                "{} {} {} {} {}",
                element.id.get(),
                n1.get(),
                n2.get(),
                n3.get(),
                n4.get()
            )?;
        }
    }
    writeln!(f, "$EndElements")
}
