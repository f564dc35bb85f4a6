//! Painting a world snapshot into an HTML table.

use lifeview_core::CellState;

/// CSS classes for a cell in the given state.
///
/// Every cell carries the base `cell` class; live cells add `alive` and
/// newly dead cells add `dead`. A cell never carries both markers.
#[inline]
pub fn cell_classes(state: CellState) -> &'static str {
    match state {
        CellState::Alive => "cell alive",
        CellState::Died => "cell dead",
        CellState::Empty => "cell",
    }
}

#[cfg(target_arch = "wasm32")]
mod dom {
    use lifeview_core::World;
    use web_sys::{Document, Element};

    use crate::config::ViewConfig;
    use crate::error::{ViewError, js_error};

    use super::cell_classes;

    /// Renders world snapshots into a table element.
    ///
    /// The `Document` and both target elements are resolved once at
    /// [`attach`](TableView::attach) time and reused for every frame, so a
    /// missing element is a construction-time error rather than a per-frame
    /// lookup.
    pub struct TableView {
        document: Document,
        table: Element,
        counter: Element,
    }

    impl TableView {
        /// Look up the table and counter elements named by `config`.
        pub fn attach(document: &Document, config: &ViewConfig) -> Result<Self, ViewError> {
            let table = lookup(document, &config.table_id)?;
            let counter = lookup(document, &config.counter_id)?;
            Ok(Self {
                document: document.clone(),
                table,
                counter,
            })
        }

        /// Replace the table's contents with one `<tr>` per grid row and one
        /// `<td>` per column, classifying each cell against `previous`.
        ///
        /// The table is fully cleared and rebuilt each call; rendering an
        /// empty world leaves it with zero rows.
        pub fn render(&self, world: &World, previous: &World) -> Result<(), ViewError> {
            self.table.set_inner_html("");
            for (y, row) in world.rows().enumerate() {
                let tr = self.document.create_element("tr").map_err(js_error)?;
                for x in 0..row.len() {
                    let td = self.document.create_element("td").map_err(js_error)?;
                    td.set_class_name(cell_classes(world.classify_against(previous, x, y)));
                    tr.append_child(&td).map_err(js_error)?;
                }
                self.table.append_child(&tr).map_err(js_error)?;
            }
            Ok(())
        }

        /// Show the server's generation counter, stringified without
        /// formatting.
        pub fn set_life_count(&self, count: u64) {
            self.counter.set_text_content(Some(&count.to_string()));
        }
    }

    fn lookup(document: &Document, id: &str) -> Result<Element, ViewError> {
        document
            .get_element_by_id(id)
            .ok_or_else(|| ViewError::ElementMissing(id.to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
pub use dom::TableView;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alive_and_dead_markers_are_exclusive() {
        assert_eq!(cell_classes(CellState::Alive), "cell alive");
        assert_eq!(cell_classes(CellState::Died), "cell dead");
        assert_eq!(cell_classes(CellState::Empty), "cell");
    }
}
