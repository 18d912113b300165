use common::document::DocumentRow;
use dioxus::prelude::*;

#[component]
pub fn LineItemsTable(rows: Vec<DocumentRow>) -> Element {
    rsx! {
        div {
            class: "line-items",
            table {
                thead {
                    tr {
                        th { class: "align-left", "Item Description" }
                        th { class: "align-center", "Qty" }
                        th { class: "align-right", "Unit Price" }
                        th { class: "align-right", "Total" }
                    }
                }
                tbody {
                    for (index, row) in rows.into_iter().enumerate() {
                        tr {
                            key: "{index}",
                            class: if row.striped { "striped" } else { "" },
                            td {
                                p { class: "item-name", "{row.name}" }
                                if let Some(description) = row.description {
                                    p { class: "item-description", "{description}" }
                                }
                                if let Some(category) = row.category {
                                    p { class: "item-category", "{category}" }
                                }
                            }
                            td { class: "align-center", "{row.quantity}" }
                            td { class: "align-right", "{row.unit_price}" }
                            td { class: "align-right line-total", "{row.line_total}" }
                        }
                    }
                }
            }
        }
    }
}
