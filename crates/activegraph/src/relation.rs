use crate::{Model, Record};

use activegraph_core::{
    stmt::{Predicate, Query, Statement, Value},
    Context, Result,
};
use std::fmt;

/// An immutable, lazily executed query over one model.
///
/// Chaining returns a new relation and never changes the receiver, so a
/// relation can be kept and refined in several independent directions.
/// Nothing runs until [`to_a`](Relation::to_a) or [`first`](Relation::first).
#[derive(Clone)]
pub struct Relation {
    model: Model,
    query: Query,
}

impl Relation {
    pub(crate) fn new(model: Model, query: Query) -> Relation {
        Relation { model, query }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    fn with(&self, query: Query) -> Relation {
        Relation {
            model: self.model.clone(),
            query,
        }
    }

    /// Adds a raw condition. Each `?` binds the next argument; a bare
    /// attribute name with a single argument is an equality test.
    ///
    /// ```no_run
    /// # async fn f(books: activegraph::Model) -> activegraph::Result<()> {
    /// # let cx = activegraph::Context::background();
    /// let recent = books.filter("year > ?", [1846]).to_a(&cx).await?;
    /// let moby = books.filter("year", [1851]).first(&cx).await?;
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn filter<I>(&self, fragment: &str, args: I) -> Relation
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let args = args.into_iter().map(Into::into).collect();
        self.with(self.query.filter(Predicate::new(fragment, args)))
    }

    /// Adds an equality condition. A `Null` value matches null attributes.
    #[must_use]
    pub fn filter_by(&self, attribute: &str, value: impl Into<Value>) -> Relation {
        self.with(self.query.filter(Predicate::eq(attribute, value)))
    }

    #[must_use]
    pub fn select<I>(&self, attributes: I) -> Relation
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.with(self.query.select(attributes))
    }

    #[must_use]
    pub fn group<I>(&self, attributes: I) -> Relation
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.with(self.query.group(attributes))
    }

    #[must_use]
    pub fn joins(&self, association: &str) -> Relation {
        self.with(self.query.join(association))
    }

    /// Orders by `"<attribute> [asc|desc]"`.
    #[must_use]
    pub fn order(&self, order: &str) -> Relation {
        self.with(self.query.order_by(order))
    }

    #[must_use]
    pub fn limit(&self, limit: u64) -> Relation {
        self.with(self.query.limit(limit))
    }

    /// Compiles the relation without executing it.
    pub fn to_sql(&self) -> Result<(String, Vec<Value>)> {
        self.model.db().to_sql(&self.statement())
    }

    /// Executes the relation and returns every matching record.
    ///
    /// Each call runs the query again. Either every row is returned or the
    /// call fails.
    pub async fn to_a(&self, cx: &Context) -> Result<Vec<Record>> {
        let rows = self.model.db().query(cx, &self.statement()).await?;

        rows.map(|row| Record::hydrate(self.model.clone(), row))
            .collect()
    }

    /// Executes the relation limited to one row.
    pub async fn first(&self, cx: &Context) -> Result<Option<Record>> {
        let records = self.limit(1).to_a(cx).await?;
        Ok(records.into_iter().next())
    }

    fn statement(&self) -> Statement {
        Statement::Query(self.query.clone())
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_sql() {
            Ok((sql, _)) => f.write_str(&sql),
            Err(err) => write!(f, "#<invalid relation: {err}>"),
        }
    }
}

impl fmt::Debug for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Relation")
            .field("model", &self.model.name())
            .field("query", &self.query)
            .finish()
    }
}
