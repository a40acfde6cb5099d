//! Column registry: how each field is read, compared and matched.
//!
//! Descriptors carry data behaviour only. Rendering lives in
//! [`crate::ui::format`].

use std::cmp::Ordering;
use std::collections::HashSet;

use chrono::NaiveDate;

use crate::domain::entities::order::{Order, OrderStatus};
use crate::error::ViewError;

/// A typed cell value borrowed from a record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellValue<'a> {
    Text(&'a str),
    Number(f64),
    Date(NaiveDate),
    Enum { rank: u8, token: &'static str, label: &'static str },
}

impl CellValue<'_> {
    fn variant_rank(&self) -> u8 {
        match self {
            CellValue::Text(_) => 0,
            CellValue::Number(_) => 1,
            CellValue::Date(_) => 2,
            CellValue::Enum { .. } => 3,
        }
    }

    /// Total order within a value type. Mixed types order by variant.
    ///
    /// Text compares case-insensitively; byte order only breaks ties
    /// between strings that differ in case alone.
    pub fn total_cmp(&self, other: &CellValue<'_>) -> Ordering {
        match (self, other) {
            (CellValue::Text(a), CellValue::Text(b)) => a
                .to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b)),
            (CellValue::Number(a), CellValue::Number(b)) => a.total_cmp(b),
            (CellValue::Date(a), CellValue::Date(b)) => a.cmp(b),
            (CellValue::Enum { rank: a, .. }, CellValue::Enum { rank: b, .. }) => a.cmp(b),
            _ => self.variant_rank().cmp(&other.variant_rank()),
        }
    }

    /// Text used by substring search.
    pub fn search_text(&self) -> String {
        match self {
            CellValue::Text(text) => (*text).to_string(),
            CellValue::Number(number) => number.to_string(),
            CellValue::Date(date) => date.format("%Y-%m-%d").to_string(),
            CellValue::Enum { token, .. } => (*token).to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Number,
    Date,
    Enum,
    /// Shown to the operator but never sorted or filtered.
    Display,
}

pub type Accessor<R> = fn(&R) -> CellValue<'_>;
pub type Comparator = fn(&CellValue<'_>, &CellValue<'_>) -> Ordering;
pub type Matcher = fn(&CellValue<'_>, &str) -> bool;

pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn match_text(value: &CellValue<'_>, needle: &str) -> bool {
    contains_ignore_case(&value.search_text(), needle)
}

fn match_enum(value: &CellValue<'_>, token: &str) -> bool {
    matches!(value, CellValue::Enum { token: current, .. } if *current == token)
}

fn match_number(value: &CellValue<'_>, needle: &str) -> bool {
    match (value, needle.trim().parse::<f64>()) {
        (CellValue::Number(number), Ok(wanted)) => *number == wanted,
        _ => false,
    }
}

fn match_date(value: &CellValue<'_>, needle: &str) -> bool {
    match (value, NaiveDate::parse_from_str(needle.trim(), "%Y-%m-%d")) {
        (CellValue::Date(date), Ok(wanted)) => *date == wanted,
        _ => false,
    }
}

fn match_nothing(_value: &CellValue<'_>, _needle: &str) -> bool {
    false
}

fn compare_values(a: &CellValue<'_>, b: &CellValue<'_>) -> Ordering {
    a.total_cmp(b)
}

pub struct ColumnDescriptor<R> {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: ColumnKind,
    pub accessor: Accessor<R>,
    pub comparator: Comparator,
    pub matcher: Matcher,
    pub sortable: bool,
    pub filterable: bool,
    pub hideable: bool,
}

// Manual impls: derive would demand `R: Clone`/`R: Debug`.
impl<R> Clone for ColumnDescriptor<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for ColumnDescriptor<R> {}

impl<R> std::fmt::Debug for ColumnDescriptor<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColumnDescriptor")
            .field("key", &self.key)
            .field("kind", &self.kind)
            .field("sortable", &self.sortable)
            .field("filterable", &self.filterable)
            .field("hideable", &self.hideable)
            .finish()
    }
}

impl<R> ColumnDescriptor<R> {
    /// A sortable, filterable, hideable column with the defaults for `kind`.
    pub fn new(key: &'static str, label: &'static str, kind: ColumnKind, accessor: Accessor<R>) -> Self {
        let matcher: Matcher = match kind {
            ColumnKind::Text => match_text,
            ColumnKind::Enum => match_enum,
            ColumnKind::Number => match_number,
            ColumnKind::Date => match_date,
            ColumnKind::Display => match_nothing,
        };
        let data_column = kind != ColumnKind::Display;
        Self {
            key,
            label,
            kind,
            accessor,
            comparator: compare_values,
            matcher,
            sortable: data_column,
            filterable: data_column,
            hideable: true,
        }
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    pub fn filterable(mut self, filterable: bool) -> Self {
        self.filterable = filterable;
        self
    }

    pub fn hideable(mut self, hideable: bool) -> Self {
        self.hideable = hideable;
        self
    }

    pub fn with_comparator(mut self, comparator: Comparator) -> Self {
        self.comparator = comparator;
        self
    }

    pub fn with_matcher(mut self, matcher: Matcher) -> Self {
        self.matcher = matcher;
        self
    }

    pub fn value<'r>(&self, record: &'r R) -> CellValue<'r> {
        (self.accessor)(record)
    }

    pub fn compare(&self, a: &R, b: &R) -> Ordering {
        (self.comparator)(&self.value(a), &self.value(b))
    }

    pub fn matches(&self, record: &R, needle: &str) -> bool {
        (self.matcher)(&self.value(record), needle)
    }
}

/// All columns of a table, in display order. Keys are unique.
#[derive(Debug, Clone)]
pub struct ColumnRegistry<R> {
    columns: Vec<ColumnDescriptor<R>>,
}

impl<R> ColumnRegistry<R> {
    pub fn new(columns: Vec<ColumnDescriptor<R>>) -> Result<Self, ViewError> {
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.key) {
                return Err(ViewError::DuplicateColumn(column.key.to_string()));
            }
        }
        Ok(Self { columns })
    }

    pub fn get(&self, key: &str) -> Option<&ColumnDescriptor<R>> {
        self.columns.iter().find(|column| column.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColumnDescriptor<R>> {
        self.columns.iter()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

fn order_id(o: &Order) -> CellValue<'_> {
    CellValue::Text(&o.id.0)
}

fn order_product(o: &Order) -> CellValue<'_> {
    CellValue::Text(&o.product)
}

fn order_company(o: &Order) -> CellValue<'_> {
    CellValue::Text(&o.company)
}

fn order_category(o: &Order) -> CellValue<'_> {
    CellValue::Text(&o.category)
}

fn order_quantity(o: &Order) -> CellValue<'_> {
    CellValue::Number(f64::from(o.quantity))
}

fn order_customer(o: &Order) -> CellValue<'_> {
    CellValue::Text(&o.customer)
}

fn order_status(o: &Order) -> CellValue<'_> {
    status_value(o.status)
}

fn order_price(o: &Order) -> CellValue<'_> {
    CellValue::Number(o.price)
}

fn order_date(o: &Order) -> CellValue<'_> {
    CellValue::Date(o.order_date)
}

fn order_image(o: &Order) -> CellValue<'_> {
    CellValue::Text(&o.image_url)
}

fn status_value(status: OrderStatus) -> CellValue<'static> {
    CellValue::Enum {
        rank: status.rank(),
        token: status.as_str(),
        label: status.label(),
    }
}

/// The order table's columns.
pub fn order_columns() -> ColumnRegistry<Order> {
    let columns = vec![
        ColumnDescriptor::new("id", "Order", ColumnKind::Text, order_id).hideable(false),
        ColumnDescriptor::new("product", "Product", ColumnKind::Text, order_product),
        ColumnDescriptor::new("company", "Company", ColumnKind::Text, order_company),
        ColumnDescriptor::new("category", "Category", ColumnKind::Text, order_category),
        ColumnDescriptor::new("quantity", "Quantity", ColumnKind::Number, order_quantity),
        ColumnDescriptor::new("customer", "Customer", ColumnKind::Text, order_customer),
        ColumnDescriptor::new("status", "Status", ColumnKind::Enum, order_status),
        ColumnDescriptor::new("price", "Price", ColumnKind::Number, order_price),
        ColumnDescriptor::new("orderDate", "Order Date", ColumnKind::Date, order_date),
        ColumnDescriptor::new("imageUrl", "Image", ColumnKind::Display, order_image),
    ];

    // Keys above are distinct literals.
    ColumnRegistry { columns }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_keys_are_rejected() {
        let columns: Vec<ColumnDescriptor<Order>> = vec![
            ColumnDescriptor::new("product", "Product", ColumnKind::Text, order_product),
            ColumnDescriptor::new("product", "Again", ColumnKind::Text, order_customer),
        ];

        let err = ColumnRegistry::new(columns).expect_err("duplicate key should fail");
        assert_eq!(err, ViewError::DuplicateColumn("product".to_string()));
    }

    #[test]
    fn order_columns_have_unique_keys() {
        let registry = order_columns();
        let keys: Vec<&str> = registry.iter().map(|column| column.key).collect();
        let rebuilt = ColumnRegistry::new(registry.iter().copied().collect());
        assert!(rebuilt.is_ok(), "keys should be unique: {keys:?}");
        assert_eq!(registry.len(), 10);
    }

    #[test]
    fn display_column_is_neither_sortable_nor_filterable() {
        let registry = order_columns();
        let image = registry.get("imageUrl").expect("image column should exist");
        assert!(!image.sortable);
        assert!(!image.filterable);
        assert!(image.hideable);
    }

    #[test]
    fn enum_values_compare_by_declared_rank() {
        let delivered = status_value(OrderStatus::Delivered);
        let shipped = status_value(OrderStatus::Shipped);
        assert_eq!(shipped.total_cmp(&delivered), Ordering::Less);
    }

    #[test]
    fn enum_matcher_is_exact() {
        let pending = status_value(OrderStatus::Pending);
        assert!(match_enum(&pending, "pending"));
        assert!(!match_enum(&pending, "pend"));
    }

    #[test]
    fn text_matcher_ignores_case() {
        assert!(match_text(&CellValue::Text("Apple iPad Pro"), "ipad"));
        assert!(!match_text(&CellValue::Text("MacBook Air"), "ipad"));
    }

    #[test]
    fn number_matcher_parses_filter() {
        assert!(match_number(&CellValue::Number(1299.0), "1299"));
        assert!(!match_number(&CellValue::Number(1299.0), "12"));
        assert!(!match_number(&CellValue::Number(1299.0), "abc"));
    }
}
