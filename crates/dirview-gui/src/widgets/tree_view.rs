/// Virtualised tree view with a sortable four-column header.
///
/// Only rows inside the viewport are painted, using the flat
/// `visible_rows` list maintained by `BrowserState`.
use crate::state::BrowserState;
use dirview_core::adapter::{Column, Icon};
use dirview_core::sort::SortOrder;
use egui::{Rect, Sense, Ui, Vec2};

/// Height of each row in pixels.
const ROW_HEIGHT: f32 = 22.0;

/// Indentation per depth level in pixels.
const INDENT_PX: f32 = 18.0;

/// Widths of the Type, Size and Modified columns; Name takes the rest.
const TYPE_W: f32 = 120.0;
const SIZE_W: f32 = 90.0;
const MODIFIED_W: f32 = 150.0;

/// Left edge of each column inside `rect`.
fn column_x(rect: Rect, column: Column) -> f32 {
    let modified_x = rect.right() - MODIFIED_W;
    let size_x = modified_x - SIZE_W;
    let type_x = size_x - TYPE_W;
    match column {
        Column::Name => rect.left() + 4.0,
        Column::Type => type_x,
        Column::Size => size_x,
        Column::Modified => modified_x,
    }
}

fn icon_glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Folder => "📁",
        Icon::Text => "📝",
        Icon::Image => "🖼",
        Icon::File => "📄",
    }
}

/// Draw the header row. Clicking a label sorts by that column.
fn header(ui: &mut Ui, state: &mut BrowserState) {
    let (rect, _) =
        ui.allocate_exact_size(Vec2::new(ui.available_width(), ROW_HEIGHT), Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, ui.visuals().faint_bg_color);

    let color = ui.visuals().weak_text_color();
    let mut clicked = None;

    for column in Column::ALL {
        let x = column_x(rect, column);
        let width = match column {
            Column::Name => column_x(rect, Column::Type) - x,
            Column::Type => TYPE_W,
            Column::Size => SIZE_W,
            Column::Modified => MODIFIED_W,
        };
        let cell = Rect::from_min_size(egui::pos2(x, rect.top()), Vec2::new(width, ROW_HEIGHT));

        let mut label = column.label().to_string();
        if state.proxy.sort_column() == Some(column) {
            label.push_str(match state.proxy.sort_order() {
                SortOrder::Ascending => " ▲",
                SortOrder::Descending => " ▼",
            });
        }
        painter.text(
            egui::pos2(x, rect.center().y),
            egui::Align2::LEFT_CENTER,
            label,
            egui::FontId::proportional(12.0),
            color,
        );

        if ui
            .interact(cell, ui.id().with(("header", column.index())), Sense::click())
            .clicked()
        {
            clicked = Some(column);
        }
    }

    if let Some(column) = clicked {
        state.sort_by(column);
    }
}

/// Draw the header and the rows.
pub fn tree_view(ui: &mut Ui, state: &mut BrowserState) {
    header(ui, state);
    ui.separator();

    if state.visible_rows.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label(
                egui::RichText::new("Nothing to show. Open an existing directory.")
                    .color(ui.visuals().weak_text_color()),
            );
        });
        return;
    }

    let color_weak = ui.visuals().weak_text_color();
    let color_normal = ui.visuals().text_color();
    let color_selection = ui.visuals().selection.bg_fill;

    let total_rows = state.visible_rows.len();
    let mut toggle_row: Option<usize> = None;
    let mut new_selection: Option<usize> = None;

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            // Reserve the full virtual height so the scrollbar is correct.
            let (response, painter) = ui.allocate_painter(
                Vec2::new(ui.available_width(), total_rows as f32 * ROW_HEIGHT),
                Sense::hover(),
            );

            let viewport = ui.clip_rect();
            let top_y = response.rect.top();
            let first = ((viewport.top() - top_y) / ROW_HEIGHT).floor().max(0.0) as usize;
            let last = (((viewport.bottom() - top_y) / ROW_HEIGHT).ceil().max(0.0) as usize)
                .min(total_rows);

            for row_idx in first..last {
                let row = state.visible_rows[row_idx];
                let row_rect = Rect::from_min_size(
                    egui::pos2(response.rect.left(), top_y + row_idx as f32 * ROW_HEIGHT),
                    Vec2::new(response.rect.width(), ROW_HEIGHT),
                );

                if state.selected == Some(row.index) {
                    painter.rect_filled(row_rect, 0.0, color_selection);
                }

                let row_response =
                    ui.interact(row_rect, ui.id().with(("row", row_idx)), Sense::click());
                if row_response.clicked() {
                    new_selection = Some(row_idx);
                }
                if row_response.double_clicked() && row.has_children {
                    toggle_row = Some(row_idx);
                }

                let text_y = row_rect.center().y;
                let indent = INDENT_PX * row.depth as f32;
                let name_x = column_x(row_rect, Column::Name) + indent + 14.0;

                if row.has_children {
                    let arrow_rect = Rect::from_min_size(
                        egui::pos2(name_x - 14.0, row_rect.top()),
                        Vec2::new(14.0, ROW_HEIGHT),
                    );
                    if ui
                        .interact(arrow_rect, ui.id().with(("arrow", row_idx)), Sense::click())
                        .clicked()
                    {
                        toggle_row = Some(row_idx);
                    }
                    painter.text(
                        egui::pos2(name_x - 12.0, text_y),
                        egui::Align2::LEFT_CENTER,
                        if row.is_expanded { "▼" } else { "▶" },
                        egui::FontId::proportional(10.0),
                        color_weak,
                    );
                }

                if let Some(icon) = state.icon(&row.index) {
                    painter.text(
                        egui::pos2(name_x, text_y),
                        egui::Align2::LEFT_CENTER,
                        icon_glyph(icon),
                        egui::FontId::proportional(13.0),
                        color_normal,
                    );
                }

                // Name, clipped so long names do not run into the Type column.
                let name_clip = Rect::from_min_max(
                    egui::pos2(name_x + 20.0, row_rect.top()),
                    egui::pos2(column_x(row_rect, Column::Type) - 6.0, row_rect.bottom()),
                );
                painter.with_clip_rect(name_clip.intersect(painter.clip_rect())).text(
                    egui::pos2(name_x + 20.0, text_y),
                    egui::Align2::LEFT_CENTER,
                    state.cell_text(&row.index, Column::Name),
                    egui::FontId::proportional(13.0),
                    color_normal,
                );

                for column in [Column::Type, Column::Size, Column::Modified] {
                    painter.text(
                        egui::pos2(column_x(row_rect, column), text_y),
                        egui::Align2::LEFT_CENTER,
                        state.cell_text(&row.index, column),
                        egui::FontId::proportional(12.0),
                        color_weak,
                    );
                }
            }
        });

    // Deferred mutations, applied after rendering finished reading the rows.
    if let Some(row_idx) = new_selection {
        state.selected = state.visible_rows.get(row_idx).map(|r| r.index);
    }
    if let Some(row_idx) = toggle_row {
        state.toggle_expand(row_idx);
    }
}
