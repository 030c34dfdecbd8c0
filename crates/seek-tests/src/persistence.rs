#[cfg(test)]
mod tests {
    use crate::{books, registry, utils::matching_titles};
    use form_store::{
        FormService, FormStore, MemoryFormStore, ServiceError, SledFormStore,
        models::VisibilityScope,
    };
    use model::{
        core::value::Value,
        fields::Operator,
        ordering::{Direction, OrderingSpec},
    };
    use seek_syntax::{Condition, FormData, JoinOp, Sequence};
    use tempfile::tempdir;
    use tracing_test::traced_test;

    const OWNER: &str = "alice";

    /// Every join is `or` and every used slot descending, the values most
    /// easily lost to a default on the way through a store.
    fn saved_form() -> FormData {
        let sequence = Sequence::new(Condition::range(
            "Year",
            Operator::InRange,
            Value::Int(1999),
            Value::Int(2000),
        ))
        .with(
            JoinOp::Or,
            Sequence::new(Condition::text("Title", Operator::StartsWith, "solar"))
                .with(JoinOp::Or, Condition::choice("Language", Operator::Equal, "polish")),
        )
        .with(JoinOp::Or, Condition::identifier("Author", Operator::Equal, "8"));

        let mut ordering = OrderingSpec::default();
        ordering.set(0, Some("Year"), Direction::Descending);
        ordering.set(1, Some("Title"), Direction::Descending);
        ordering.set(2, None, Direction::Descending);

        FormData::new(sequence)
            .with_ordering(ordering)
            .with_report_type("export")
    }

    fn assert_same_form(loaded: &FormData, saved: &FormData) {
        assert_eq!(loaded.sequence.joins().collect::<Vec<_>>(), vec![JoinOp::Or, JoinOp::Or]);
        assert!(
            loaded.ordering.slots().iter().all(|s| s.direction == Direction::Descending),
            "ordering directions changed: {:?}",
            loaded.ordering
        );
        assert_eq!(loaded, saved);
    }

    #[traced_test]
    #[tokio::test]
    async fn memory_store_keeps_joins_and_directions() {
        let registry = registry();
        let service = FormService::new(MemoryFormStore::new());
        let form = saved_form();

        service.save("classics", OWNER, false, &form, false).await.unwrap();
        let loaded = service.load("classics", OWNER, &registry).await.unwrap();
        assert_same_form(&loaded, &form);

        // The loaded form runs exactly like the one that was saved.
        let rows = books();
        assert_eq!(
            matching_titles(&loaded, &registry, &rows),
            matching_titles(&form, &registry, &rows)
        );
    }

    #[traced_test]
    #[tokio::test]
    async fn sled_store_keeps_joins_and_directions() {
        let registry = registry();
        let dir = tempdir().unwrap();
        let form = saved_form();

        let service = FormService::new(SledFormStore::open(dir.path()).unwrap());
        service.save("classics", OWNER, true, &form, false).await.unwrap();

        let record = service
            .store()
            .find_by_name("classics", OWNER, VisibilityScope::Owned)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(record.data, form.to_json_string());

        let loaded = service.load("classics", OWNER, &registry).await.unwrap();
        assert_same_form(&loaded, &form);

        // Public, so another user sees it too.
        let loaded = service.load("classics", "bob", &registry).await.unwrap();
        assert_same_form(&loaded, &form);
        assert_eq!(service.list("bob", true).await.unwrap(), vec!["classics"]);
    }

    #[traced_test]
    #[tokio::test]
    async fn overwrite_needs_confirmation() {
        let registry = registry();
        let dir = tempdir().unwrap();
        let service = FormService::new(SledFormStore::open(dir.path()).unwrap());

        let first = service
            .save("recent", OWNER, false, &saved_form(), false)
            .await
            .unwrap();

        let replacement = FormData::new(Sequence::new(Condition::text(
            "Title",
            Operator::Contains,
            "java",
        )));
        assert!(matches!(
            service.save("recent", OWNER, false, &replacement, false).await,
            Err(ServiceError::Conflict(_))
        ));
        assert_eq!(service.load("recent", OWNER, &registry).await.unwrap(), saved_form());

        let second = service
            .save("recent", OWNER, false, &replacement, true)
            .await
            .unwrap();
        assert_eq!(second.id, first.id);
        assert_eq!(second.created_at, first.created_at);
        assert_eq!(service.load("recent", OWNER, &registry).await.unwrap(), replacement);

        // Private forms stay with their owner.
        assert!(matches!(
            service.load("recent", "bob", &registry).await,
            Err(ServiceError::NotFound(_))
        ));
        assert!(service.store().list_visible("bob", true).await.unwrap().is_empty());
    }
}
