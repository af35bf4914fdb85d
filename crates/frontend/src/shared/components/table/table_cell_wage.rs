//! Table cell for hourly wages
//!
//! ```rust,ignore
//! <TableCellWage value=employee.wage />
//! ```

use super::number_format::format_yen;
use leptos::prelude::*;
use thaw::*;

/// Wage cell: yen sign, comma thousands separator, right aligned
#[component]
pub fn TableCellWage(value: i32) -> impl IntoView {
    view! {
        <TableCell class="text-right">
            <TableCellLayout>
                <span>{format_yen(value)}</span>
            </TableCellLayout>
        </TableCell>
    }
}
