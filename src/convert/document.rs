//! Whole-document conversion and node lookup.

use std::collections::BTreeMap;

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::model::{Document, Page};
use crate::schema::{FileResponse, Node, NodeEntry, NodeType, NodesResponse};

use super::{ConvertOptions, ConvertResult, ConvertStats, NodeAssembler};

/// Version of the emitted schema.
pub const SCHEMA_VERSION: u32 = 0;

/// Id of the DOCUMENT root node.
pub const DOCUMENT_ID: &str = "0:0";

/// Convert a whole document.
///
/// The DOCUMENT root is level 0 and pages are CANVAS children at level 1.
/// Pages are converted in parallel unless the options say otherwise; the
/// output is the same either way.
pub fn convert_document(
    doc: &Document,
    options: &ConvertOptions,
) -> ConvertResult<FileResponse> {
    let mut stats = ConvertStats::new();
    let mut root = Node::new(DOCUMENT_ID, "Document", NodeType::Document);

    if options.allows_children(0) {
        let pages = if options.parallel && doc.pages.len() > 1 {
            doc.pages
                .par_iter()
                .map(|page| convert_page(page, options))
                .collect::<Vec<_>>()
        } else {
            doc.pages
                .iter()
                .map(|page| convert_page(page, options))
                .collect()
        };

        let mut children = Vec::with_capacity(pages.len());
        for (node, page_stats) in pages {
            stats.merge(&page_stats);
            children.push(node);
        }
        root.children = Some(children);
    } else if !doc.pages.is_empty() {
        stats.add_truncated();
    }

    log::debug!(
        "Converted {:?}: {} pages, {} nodes, {} truncated, {} skipped",
        doc.name,
        stats.page_count,
        stats.node_count,
        stats.truncated_count,
        stats.skipped_count
    );

    let response = FileResponse {
        name: doc.name.clone(),
        last_modified: doc.last_modified,
        version: doc.version.clone(),
        schema_version: SCHEMA_VERSION,
        document: root,
    };
    ConvertResult::new(response, stats)
}

fn convert_page(page: &Page, options: &ConvertOptions) -> (Node, ConvertStats) {
    let mut assembler = NodeAssembler::new(options);
    let node = assembler.page_node(page, 1);
    (node, assembler.into_stats())
}

/// Convert individually requested nodes.
///
/// Each id resolves to a page or to a shape anywhere in the document, and
/// the depth limit counts from the requested node. Ids that resolve to
/// nothing, to a skipped shape or to a hidden shape while hidden shapes are
/// excluded map to `null`.
pub fn convert_nodes<I, S>(
    doc: &Document,
    ids: I,
    options: &ConvertOptions,
) -> ConvertResult<NodesResponse>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut assembler = NodeAssembler::new(options);
    let mut nodes = BTreeMap::new();

    for id in ids {
        let id = id.as_ref();
        let node = match lookup(doc, None, id, options, &mut assembler) {
            Ok(node) => Some(NodeEntry { document: node }),
            Err(e) => {
                log::debug!("{} in {:?}", e, doc.name);
                None
            }
        };
        nodes.insert(id.to_string(), node);
    }

    let response = NodesResponse {
        name: doc.name.clone(),
        last_modified: doc.last_modified,
        version: doc.version.clone(),
        nodes,
    };
    ConvertResult::new(response, assembler.into_stats())
}

/// Convert one node, optionally restricted to one page.
///
/// `node_id` may name the page itself. Fails when the page or node does not
/// exist, when the node is hidden (directly or through an ancestor) while
/// hidden shapes are excluded, or when the node has a kind that cannot be
/// converted.
pub fn get_node(
    doc: &Document,
    page_id: Option<&str>,
    node_id: &str,
    options: &ConvertOptions,
) -> Result<Node> {
    let mut assembler = NodeAssembler::new(options);
    lookup(doc, page_id, node_id, options, &mut assembler)
}

fn lookup(
    doc: &Document,
    page_id: Option<&str>,
    node_id: &str,
    options: &ConvertOptions,
    assembler: &mut NodeAssembler<'_>,
) -> Result<Node> {
    let pages: Vec<&Page> = match page_id {
        Some(page_id) => vec![doc
            .get_page(page_id)
            .ok_or_else(|| Error::PageNotFound(page_id.to_string()))?],
        None => doc.pages.iter().collect(),
    };

    if let Some(page) = pages.iter().find(|page| page.id == node_id) {
        return Ok(assembler.assemble_page(page));
    }

    let location = pages
        .iter()
        .find_map(|page| page.locate_shape(node_id))
        .ok_or_else(|| Error::NodeNotFound(node_id.to_string()))?;

    if !location.visible && !options.include_hidden {
        return Err(Error::Hidden(node_id.to_string()));
    }

    assembler
        .assemble_in(location.shape, &location.parent)
        .ok_or_else(|| Error::Unconvertible(node_id.to_string()))
}
