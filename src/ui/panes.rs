//! Pane rendering for the playback TUI
//!
//! Each pane renders from one [`Frame`](crate::trace::Frame): the structure
//! pane draws the snapshot with highlighted elements, the pseudocode pane
//! draws the algorithm's static line table with the active line marked, and
//! the status bar shows the frame message and playback position.

use crate::snapshot::{GraphValue, ListValue, QueueValue, StructureValue, TreeValue};
use crate::structures::{ListKind, QueueKind};
use crate::trace::{ElementRef, NodeId};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

fn base_style() -> Style {
    Style::default().fg(DEFAULT_THEME.fg)
}

fn highlight_style() -> Style {
    Style::default()
        .fg(DEFAULT_THEME.highlight)
        .add_modifier(Modifier::BOLD)
}

fn has_index(highlight: &[ElementRef], i: usize) -> bool {
    highlight.iter().any(|h| matches!(h, ElementRef::Index(j) if *j == i))
}

fn has_node(highlight: &[ElementRef], id: NodeId) -> bool {
    highlight.iter().any(|h| matches!(h, ElementRef::Node(n) if *n == id))
}

fn has_vertex(highlight: &[ElementRef], id: &str) -> bool {
    highlight
        .iter()
        .any(|h| matches!(h, ElementRef::Vertex(v) if v == id))
}

/// Edge refs match either endpoint order on undirected graphs.
fn has_edge(highlight: &[ElementRef], u: &str, v: &str, directed: bool) -> bool {
    highlight.iter().any(|h| match h {
        ElementRef::Edge(a, b) => (a == u && b == v) || (!directed && a == v && b == u),
        _ => false,
    })
}

/// Render the snapshot of the current frame.
pub fn render_structure_pane(
    frame: &mut Frame,
    area: Rect,
    snapshot: &StructureValue,
    highlight: &[ElementRef],
    title: &str,
) {
    let lines = match snapshot {
        StructureValue::Array(values) => array_lines(values, highlight),
        StructureValue::Stack(items) => stack_lines(items, highlight),
        StructureValue::Queue(queue) => queue_lines(queue, highlight),
        StructureValue::Text(text) => text_lines(text, highlight),
        StructureValue::List(list) => list_lines(list, highlight),
        StructureValue::Tree(tree) => tree_lines(tree, highlight),
        StructureValue::Graph(graph) => graph_lines(graph, highlight),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));
    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

fn array_lines(values: &[i64], highlight: &[ElementRef]) -> Vec<Line<'static>> {
    let mut cells = vec![Span::raw(" ")];
    let mut indices = vec![Span::raw(" ")];
    for (i, v) in values.iter().enumerate() {
        let cell = format!("[{:^4}]", v);
        let width = cell.chars().count();
        let style = if has_index(highlight, i) {
            highlight_style()
        } else {
            base_style()
        };
        cells.push(Span::styled(cell, style));
        cells.push(Span::raw(" "));
        indices.push(Span::styled(
            format!("{:^width$}", i, width = width),
            Style::default().fg(DEFAULT_THEME.comment),
        ));
        indices.push(Span::raw(" "));
    }
    if values.is_empty() {
        return vec![Line::from(Span::styled(
            " (empty)",
            Style::default().fg(DEFAULT_THEME.comment),
        ))];
    }
    vec![Line::from(cells), Line::from(indices)]
}

/// Top of the stack renders first, matching index 0 in the snapshot.
fn stack_lines(items: &[String], highlight: &[ElementRef]) -> Vec<Line<'static>> {
    if items.is_empty() {
        return vec![Line::from(Span::styled(
            " (empty)",
            Style::default().fg(DEFAULT_THEME.comment),
        ))];
    }
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let marker = if i == 0 { "top -> " } else { "       " };
            let style = if has_index(highlight, i) {
                highlight_style()
            } else {
                base_style()
            };
            Line::from(vec![
                Span::styled(marker.to_string(), Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(format!("| {:^6} |", item), style),
            ])
        })
        .collect()
}

fn queue_lines(queue: &QueueValue, highlight: &[ElementRef]) -> Vec<Line<'static>> {
    let mut cells = vec![Span::raw(" ")];
    let mut markers = vec![Span::raw(" ")];
    for (i, slot) in queue.slots.iter().enumerate() {
        let cell = match slot {
            Some(entry) => match entry.priority {
                Some(p) => format!("[{}({})]", entry.value, p),
                None => format!("[{:^4}]", entry.value),
            },
            None => "[    ]".to_string(),
        };
        let width = cell.chars().count();
        let style = if has_index(highlight, i) {
            highlight_style()
        } else if slot.is_some() {
            base_style()
        } else {
            Style::default().fg(DEFAULT_THEME.comment)
        };
        cells.push(Span::styled(cell, style));
        cells.push(Span::raw(" "));

        let mark = match (i == queue.front, i == queue.rear) {
            (true, true) => "F,R",
            (true, false) => "F",
            (false, true) => "R",
            (false, false) => "",
        };
        markers.push(Span::styled(
            format!("{:^width$}", mark, width = width),
            Style::default().fg(DEFAULT_THEME.secondary),
        ));
        markers.push(Span::raw(" "));
    }
    let mut lines = vec![Line::from(cells)];
    // Front and rear cursors only mean something for circular queues; the
    // other kinds keep front at 0.
    if queue.kind == QueueKind::Circular {
        lines.push(Line::from(markers));
    }
    lines.push(Line::from(Span::styled(
        format!(" {}", queue.kind.label()),
        Style::default().fg(DEFAULT_THEME.comment),
    )));
    lines
}

fn text_lines(text: &str, highlight: &[ElementRef]) -> Vec<Line<'static>> {
    if text.is_empty() {
        return vec![Line::from(Span::styled(
            " (empty)",
            Style::default().fg(DEFAULT_THEME.comment),
        ))];
    }
    let mut cells = vec![Span::raw(" ")];
    let mut indices = vec![Span::raw(" ")];
    for (i, c) in text.chars().enumerate() {
        let style = if has_index(highlight, i) {
            highlight_style()
        } else {
            base_style()
        };
        cells.push(Span::styled(format!("[{}]", c), style));
        indices.push(Span::styled(
            format!("{:^3}", i),
            Style::default().fg(DEFAULT_THEME.comment),
        ));
    }
    vec![Line::from(cells), Line::from(indices)]
}

/// One line per node in walk order from the head, with the link drawn after
/// each value. The walk stops on the first revisit, so circular lists and
/// lists with a loop render once and then mark the wrap-around.
fn list_lines(list: &ListValue, highlight: &[ElementRef]) -> Vec<Line<'static>> {
    let Some(head) = list.head else {
        return vec![Line::from(Span::styled(
            " (empty)",
            Style::default().fg(DEFAULT_THEME.comment),
        ))];
    };
    let arrow = match list.kind {
        ListKind::Doubly => " <-> ",
        _ => " -> ",
    };
    let mut spans = vec![Span::styled(
        "head -> ".to_string(),
        Style::default().fg(DEFAULT_THEME.comment),
    )];
    let mut seen = Vec::new();
    let mut cursor = Some(head);
    let mut wrap: Option<NodeId> = None;
    while let Some(id) = cursor {
        if seen.contains(&id) {
            wrap = Some(id);
            break;
        }
        seen.push(id);
        let Some(node) = list.node(id) else { break };
        let style = if has_node(highlight, id) {
            highlight_style()
        } else {
            base_style()
        };
        spans.push(Span::styled(format!("[{}]", node.value), style));
        cursor = node.next;
        if let Some(next) = cursor {
            if !seen.contains(&next) {
                spans.push(Span::styled(
                    arrow.to_string(),
                    Style::default().fg(DEFAULT_THEME.comment),
                ));
            }
        }
    }
    let mut lines = vec![Line::from(spans)];
    if let Some(id) = wrap {
        let target = list.node(id).map(|n| n.value);
        let note = match target {
            Some(v) => format!(" (loops back to [{}])", v),
            None => " (loops back)".to_string(),
        };
        lines.push(Line::from(Span::styled(
            note,
            Style::default().fg(DEFAULT_THEME.secondary),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            " -> null",
            Style::default().fg(DEFAULT_THEME.comment),
        )));
    }
    lines.push(Line::from(Span::styled(
        format!(" {}", list.kind.label()),
        Style::default().fg(DEFAULT_THEME.comment),
    )));
    lines
}

/// Sideways tree: right subtree above, root in the middle, left below, with
/// indentation growing by depth.
fn tree_lines(tree: &TreeValue, highlight: &[ElementRef]) -> Vec<Line<'static>> {
    fn walk(
        tree: &TreeValue,
        highlight: &[ElementRef],
        id: Option<NodeId>,
        depth: usize,
        out: &mut Vec<Line<'static>>,
    ) {
        let Some(node) = id.and_then(|id| tree.node(id)) else {
            return;
        };
        walk(tree, highlight, node.right, depth + 1, out);
        let style = if has_node(highlight, node.id) {
            highlight_style()
        } else {
            base_style()
        };
        out.push(Line::from(vec![
            Span::raw(" ".repeat(1 + depth * 4)),
            Span::styled(format!("{}", node.value), style),
        ]));
        walk(tree, highlight, node.left, depth + 1, out);
    }

    if tree.root.is_none() {
        return vec![Line::from(Span::styled(
            " (empty)",
            Style::default().fg(DEFAULT_THEME.comment),
        ))];
    }
    let mut out = Vec::new();
    walk(tree, highlight, tree.root, 0, &mut out);
    out
}

/// Adjacency view, one line per vertex.
fn graph_lines(graph: &GraphValue, highlight: &[ElementRef]) -> Vec<Line<'static>> {
    if graph.vertices.is_empty() {
        return vec![Line::from(Span::styled(
            " (no vertices)",
            Style::default().fg(DEFAULT_THEME.comment),
        ))];
    }
    let arrow = if graph.directed { " -> " } else { " -- " };
    graph
        .adjacency()
        .into_iter()
        .map(|(id, neighbors)| {
            let vertex_style = if has_vertex(highlight, &id) {
                highlight_style()
            } else {
                Style::default().fg(DEFAULT_THEME.primary)
            };
            let mut spans = vec![
                Span::raw(" "),
                Span::styled(id.clone(), vertex_style),
                Span::styled(arrow.to_string(), Style::default().fg(DEFAULT_THEME.comment)),
            ];
            if neighbors.is_empty() {
                spans.push(Span::styled(
                    "(none)".to_string(),
                    Style::default().fg(DEFAULT_THEME.comment),
                ));
            }
            for (i, (to, weight)) in neighbors.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(", "));
                }
                let style = if has_edge(highlight, &id, to, graph.directed) {
                    highlight_style()
                } else {
                    base_style()
                };
                spans.push(Span::styled(format!("{}({})", to, weight), style));
            }
            Line::from(spans)
        })
        .collect()
}

/// Render the static pseudocode table with the active line marked.
pub fn render_pseudocode_pane(
    frame: &mut Frame,
    area: Rect,
    lines: &'static [&'static str],
    current_line: i32,
) {
    let body: Vec<Line> = if lines.is_empty() {
        vec![Line::from(Span::styled(
            " (no pseudocode)",
            Style::default().fg(DEFAULT_THEME.comment),
        ))]
    } else {
        lines
            .iter()
            .enumerate()
            .map(|(i, text)| {
                if current_line >= 0 && i == current_line as usize {
                    Line::from(vec![
                        Span::styled("> ", Style::default().fg(DEFAULT_THEME.secondary)),
                        Span::styled(*text, base_style().add_modifier(Modifier::BOLD)),
                    ])
                    .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
                } else {
                    Line::from(vec![Span::raw("  "), Span::styled(*text, base_style())])
                }
            })
            .collect()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Pseudocode ")
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));
    frame.render_widget(Paragraph::new(body).block(block), area);
}

/// Render the status bar at the bottom of the screen.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    position: usize,
    total: usize,
    is_playing: bool,
) {
    let play_indicator = if is_playing { "▶ " } else { "" };
    let frame_info = if total > 0 {
        format!("{}{}/{}", play_indicator, position + 1, total)
    } else {
        "0/0".to_string()
    };

    let status = Line::from(vec![
        Span::styled(
            format!(" {} ", frame_info),
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("│ ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(message.to_string(), base_style()),
        Span::styled(
            " │ ←/→: step | space: play/pause | enter: end | bksp: start | q: quit",
            Style::default().fg(DEFAULT_THEME.comment),
        ),
    ]);

    frame.render_widget(Paragraph::new(status), area);
}
