use model::schema::{column::RelationTarget, entity::EntityDescriptor};
use planner::filter::{JoinRequest, PredicateSink};
use tracing::debug;

/// Turns relation traversals (`address.city`) into LEFT OUTER JOIN
/// registrations on the sink.
///
/// The sink's registered joins are the only state: a second traversal of the
/// same relation from the same alias reuses the first join's alias, including
/// joins registered by an earlier filter on the same sink.
#[derive(Debug, Clone)]
pub struct JoinPlanner {
    root_alias: String,
}

impl JoinPlanner {
    pub fn new(root_alias: &str) -> Self {
        Self {
            root_alias: root_alias.to_string(),
        }
    }

    /// Returns the alias predicates on the related table must use.
    pub fn request(
        &self,
        sink: &mut dyn PredicateSink,
        source_alias: &str,
        relation_property: &str,
        relation: &RelationTarget,
        target: &EntityDescriptor,
    ) -> String {
        if let Some(existing) = sink
            .joins()
            .iter()
            .find(|join| join.is_same_relation(source_alias, relation_property))
        {
            debug!(
                "Reusing join {}.{} as '{}'",
                source_alias, relation_property, existing.target_alias
            );
            return existing.target_alias.clone();
        }

        let target_alias = self.unique_alias(&target.table, sink.joins());
        debug!(
            "Joining {}.{} to '{}' as '{}'",
            source_alias, relation_property, target.table, target_alias
        );

        sink.add_join(JoinRequest {
            source_alias: source_alias.to_string(),
            relation_property: relation_property.to_string(),
            target_table: target.table.clone(),
            target_alias: target_alias.clone(),
            source_column: relation.local_column.clone(),
            target_column: relation.foreign_column.clone(),
        });

        target_alias
    }

    /// The related table's own name, suffixed `_1`, `_2`, ... when that alias
    /// is already taken by the root table or an earlier join.
    fn unique_alias(&self, table: &str, joins: &[JoinRequest]) -> String {
        let taken =
            |alias: &str| alias == self.root_alias || joins.iter().any(|j| j.target_alias == alias);

        if !taken(table) {
            return table.to_string();
        }

        let mut suffix = 1;
        loop {
            let candidate = format!("{table}_{suffix}");
            if !taken(&candidate) {
                return candidate;
            }
            suffix += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::{core::data_type::ScalarType, schema::column::ColumnDescriptor};
    use planner::filter::FilterQuery;

    fn addresses() -> EntityDescriptor {
        EntityDescriptor::new(
            "Address",
            "addresses",
            vec![ColumnDescriptor::scalar("city", ScalarType::Text)],
        )
        .unwrap()
    }

    #[test]
    fn test_request_registers_left_join() {
        let mut query = FilterQuery::new("user");
        let planner = JoinPlanner::new("user");
        let relation = RelationTarget::new("Address", "address_id", "id");

        let alias = planner.request(&mut query, "user", "address", &relation, &addresses());

        assert_eq!(alias, "addresses");
        assert_eq!(
            query.joins(),
            &[JoinRequest {
                source_alias: "user".into(),
                relation_property: "address".into(),
                target_table: "addresses".into(),
                target_alias: "addresses".into(),
                source_column: "address_id".into(),
                target_column: "id".into(),
            }]
        );
    }

    #[test]
    fn test_repeated_request_reuses_alias() {
        let mut query = FilterQuery::new("user");
        let planner = JoinPlanner::new("user");
        let relation = RelationTarget::new("Address", "address_id", "id");

        let first = planner.request(&mut query, "user", "address", &relation, &addresses());
        let second = planner.request(&mut query, "user", "address", &relation, &addresses());

        assert_eq!(first, second);
        assert_eq!(query.joins().len(), 1);
    }

    #[test]
    fn test_second_relation_to_same_table_gets_suffixed_alias() {
        let mut query = FilterQuery::new("user");
        let planner = JoinPlanner::new("user");
        let shipping = RelationTarget::new("Address", "address_id", "id");
        let billing = RelationTarget::new("Address", "billing_address_id", "id");

        planner.request(&mut query, "user", "address", &shipping, &addresses());
        let alias = planner.request(&mut query, "user", "billing", &billing, &addresses());

        assert_eq!(alias, "addresses_1");
        assert_eq!(query.joins().len(), 2);
    }

    #[test]
    fn test_self_join_does_not_shadow_root_alias() {
        let mut query = FilterQuery::new("user");
        let planner = JoinPlanner::new("user");
        let users = EntityDescriptor::new(
            "User",
            "user",
            vec![ColumnDescriptor::scalar("name", ScalarType::Text)],
        )
        .unwrap();
        let manager = RelationTarget::new("User", "manager_id", "id");

        let alias = planner.request(&mut query, "user", "manager", &manager, &users);
        assert_eq!(alias, "user_1");
    }
}
