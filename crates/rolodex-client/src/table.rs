// SPDX-License-Identifier: Apache-2.0

use rolodex_model::Contact;
use std::cmp::Ordering;

/// Page sizes the table offers, smallest first.
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [5, 10, 25];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Id,
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    Company,
    JobTitle,
}

// `id` is a number on the wire and compares numerically; every other
// column, phone number included, compares as a string.
fn column_cmp(a: &Contact, b: &Contact, column: SortColumn) -> Ordering {
    match column {
        SortColumn::Id => a.id.cmp(&b.id),
        SortColumn::FirstName => a.first_name.cmp(&b.first_name),
        SortColumn::LastName => a.last_name.cmp(&b.last_name),
        SortColumn::Email => a.email.cmp(&b.email),
        SortColumn::PhoneNumber => a.phone_number.cmp(&b.phone_number),
        SortColumn::Company => a.company.cmp(&b.company),
        SortColumn::JobTitle => a.job_title.cmp(&b.job_title),
    }
}

/// The page-sized, sorted subset of `rows` currently rendered. Pure:
/// recomputed from scratch whenever the source list or any control
/// changes. The sort is stable, so equal keys keep their fetch order.
#[must_use]
pub fn visible_slice(
    rows: &[Contact],
    order: SortOrder,
    order_by: SortColumn,
    page: usize,
    page_size: usize,
) -> Vec<Contact> {
    let mut sorted: Vec<Contact> = rows.to_vec();
    sorted.sort_by(|a, b| {
        let ord = column_cmp(a, b, order_by);
        match order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });
    let start = page.saturating_mul(page_size).min(sorted.len());
    let end = start.saturating_add(page_size).min(sorted.len());
    sorted[start..end].to_vec()
}

/// Sort and pagination controls of the contact table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    pub order: SortOrder,
    pub order_by: SortColumn,
    pub page: usize,
    pub page_size: usize,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            order: SortOrder::Asc,
            order_by: SortColumn::FirstName,
            page: 0,
            page_size: PAGE_SIZE_OPTIONS[0],
        }
    }
}

impl TableState {
    /// Repeated requests on the active column toggle the direction; a new
    /// column resets to ascending.
    pub fn request_sort(&mut self, column: SortColumn) {
        let is_asc = self.order_by == column && self.order == SortOrder::Asc;
        self.order = if is_asc {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        };
        self.order_by = column;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Changing the page size jumps back to the first page.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size;
        self.page = 0;
    }

    #[must_use]
    pub fn visible(&self, rows: &[Contact]) -> Vec<Contact> {
        visible_slice(rows, self.order, self.order_by, self.page, self.page_size)
    }
}
