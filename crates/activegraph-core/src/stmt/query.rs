use super::{List, OrderBy, Predicate};

/// An immutable query descriptor over one model.
///
/// Every builder method returns a new `Query` and leaves the receiver
/// untouched. The lists are persistent, so a query used as the base of many
/// refinements shares its existing items with all of them.
#[derive(Debug, Clone)]
pub struct Query {
    /// Name of the model being queried
    pub model: String,

    /// Filter conditions, combined with `AND`
    pub filter: List<Predicate>,

    /// Projected attributes. Empty means every catalog attribute.
    pub select: List<String>,

    /// Grouped attributes
    pub group: List<String>,

    /// Associations to join, by name
    pub joins: List<String>,

    pub order_by: List<OrderBy>,

    pub limit: Option<u64>,
}

impl Query {
    pub fn new(model: impl Into<String>) -> Query {
        Query {
            model: model.into(),
            filter: List::new(),
            select: List::new(),
            group: List::new(),
            joins: List::new(),
            order_by: List::new(),
            limit: None,
        }
    }

    #[must_use]
    pub fn filter(&self, predicate: Predicate) -> Query {
        Query {
            filter: self.filter.push(predicate),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn select<I>(&self, attributes: I) -> Query
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Query {
            select: push_unique(&self.select, attributes),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn group<I>(&self, attributes: I) -> Query
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Query {
            group: push_unique(&self.group, attributes),
            ..self.clone()
        }
    }

    /// Adds a join on the named association. Joining the same association
    /// twice is a no-op.
    #[must_use]
    pub fn join(&self, association: impl Into<String>) -> Query {
        Query {
            joins: push_unique(&self.joins, [association]),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn order_by(&self, order_by: impl Into<OrderBy>) -> Query {
        Query {
            order_by: self.order_by.push(order_by.into()),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn limit(&self, limit: u64) -> Query {
        Query {
            limit: Some(limit),
            ..self.clone()
        }
    }
}

fn push_unique<I>(list: &List<String>, items: I) -> List<String>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    items.into_iter().fold(list.clone(), |list, item| {
        let item = item.into();
        if list.contains(&item) {
            list
        } else {
            list.push(item)
        }
    })
}
