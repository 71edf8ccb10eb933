//! # Inventory Edit Flows
//!
//! A `WorldActor` with its inventory, an open chest and the crafting grid
//! as transient buffer, driven through `TransactionGroup::execute()`.
//!
//! ## Flows Tested:
//!
//! 1. **Move**: chest slot → crafting grid escrow → inventory slot
//! 2. **Out-of-order edits**: inbound side arrives first and settles on retry
//! 3. **Drop**: inventory slot → escrow → ejected into the world
//! 4. **Desync**: a stale edit is abandoned and the client told to refresh
//! 5. **Unrestricted edits**: creative actors and the global cheat override

#[cfg(test)]
mod tests {
    use crate::world::{diamond, dirt, stone, WorldActor, CHEST, INVENTORY};
    use inventory_telemetry::init_test_logging;
    use inventory_transactions::{
        ChannelNotifier, Container, ExecutionContext, InMemoryContainer, LoggingNotifier,
        RecordingNotifier, SlotLocation, Transaction, TransactionError, TransactionGroup,
        TransactionGroupConfig, TransactionKind, TransactionStatus,
    };
    use shared_types::{ContainerId, Item, SlotIndex};

    // =========================================================================
    // FIXTURES
    // =========================================================================

    fn edit(container: ContainerId, slot: SlotIndex, from: Item, to: Item) -> Transaction {
        Transaction::from_slot_edit(SlotLocation::new(container, slot), &from, to)
            .expect("edit changes the slot")
    }

    fn group(actor: WorldActor) -> TransactionGroup<WorldActor> {
        TransactionGroup::new(Some(actor))
    }

    fn world(group: &TransactionGroup<WorldActor>) -> &WorldActor {
        group.actor().expect("group has an actor")
    }

    // =========================================================================
    // MOVES THROUGH THE TRANSIENT BUFFER
    // =========================================================================

    #[test]
    fn test_move_from_chest_to_inventory() {
        init_test_logging();
        let mut group = group(WorldActor::new().with_chest_item(0, stone(10)));
        let mut sink = RecordingNotifier::new();

        let take = edit(CHEST, 0, stone(10), Item::air());
        let put = edit(INVENTORY, 3, Item::air(), stone(10));
        let ids = vec![take.id(), put.id()];
        group.add_transaction(take);
        group.add_transaction(put);

        assert!(group.execute(&ExecutionContext::default(), &mut sink));

        let actor = world(&group);
        assert_eq!(actor.chest_item(0), Item::air());
        assert_eq!(actor.inventory.get_item(3), stone(10));
        assert!(actor.crafting.is_empty());
        assert_eq!(sink.ids(), ids);
        assert_eq!(group.last_report().succeeded, 2);
    }

    #[test]
    fn test_split_stack_moves_only_the_difference() {
        init_test_logging();
        let mut group = group(WorldActor::new().with_chest_item(0, stone(10)));
        let mut sink = RecordingNotifier::new();

        group.add_transaction(edit(CHEST, 0, stone(10), stone(4)));
        group.add_transaction(edit(INVENTORY, 1, Item::air(), stone(6)));
        group.execute(&ExecutionContext::default(), &mut sink);

        let actor = world(&group);
        assert_eq!(actor.chest_item(0), stone(4));
        assert_eq!(actor.inventory.get_item(1), stone(6));
        assert!(actor.crafting.is_empty());
    }

    #[test]
    fn test_inbound_first_settles_on_next_cycle() {
        init_test_logging();
        let mut group = group(WorldActor::new().with_chest_item(5, dirt(8)));
        let mut sink = RecordingNotifier::new();
        let ctx = ExecutionContext::default();

        let put = edit(INVENTORY, 0, Item::air(), dirt(8));
        let take = edit(CHEST, 5, dirt(8), Item::air());
        let (put_id, take_id) = (put.id(), take.id());
        group.add_transaction(put);
        group.add_transaction(take);

        group.execute(&ctx, &mut sink);
        assert_eq!(sink.ids(), vec![take_id]);
        assert_eq!(group.retry_queue().len(), 1);
        assert_eq!(world(&group).crafting.total_count(&dirt(1)), 8);

        group.execute(&ctx, &mut sink);
        assert_eq!(sink.ids(), vec![take_id, put_id]);
        assert_eq!(sink.outcomes()[1].failures, 1);
        assert_eq!(group.last_report().admitted_retries, 1);
        assert_eq!(world(&group).inventory.get_item(0), dirt(8));
        assert!(world(&group).crafting.is_empty());
    }

    // =========================================================================
    // DROPS
    // =========================================================================

    #[test]
    fn test_drop_from_inventory_ejects_item() {
        init_test_logging();
        let mut group = group(WorldActor::new().with_inventory_item(2, dirt(5)));
        let mut sink = RecordingNotifier::new();

        let eject = Transaction::drop_item(None, dirt(5));
        assert_eq!(eject.kind(), TransactionKind::Drop);
        group.add_transaction(edit(INVENTORY, 2, dirt(5), Item::air()));
        group.add_transaction(eject);
        group.execute(&ExecutionContext::default(), &mut sink);

        let actor = world(&group);
        assert_eq!(actor.dropped, vec![dirt(5)]);
        assert_eq!(actor.inventory.get_item(2), Item::air());
        assert!(actor.crafting.is_empty());
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn test_drop_without_escrow_is_rejected_until_exhausted() {
        init_test_logging();
        let mut group = group(WorldActor::new());
        let mut sink = LoggingNotifier;

        group.add_transaction(Transaction::drop_item(None, diamond(1)));
        for _ in 0..5 {
            group.execute(&ExecutionContext::default(), &mut sink);
        }

        assert!(world(&group).dropped.is_empty());
        assert_eq!(group.last_report().abandoned, 1);
        assert!(group.retry_queue().is_empty());
    }

    // =========================================================================
    // DESYNC AND RESYNCHRONIZATION
    // =========================================================================

    #[tokio::test]
    async fn test_stale_edit_reports_refresh_once() {
        init_test_logging();
        let actor = WorldActor::new();
        let actor_id = actor.id;
        let mut group = group(actor);
        let (mut sink, mut rx) = ChannelNotifier::channel(actor_id);

        // Client believes slot 4 holds a diamond; the chest is empty.
        let stale = edit(CHEST, 4, diamond(1), Item::air());
        let stale_id = stale.id();
        group.add_transaction(stale);

        for cycle in 1..=4 {
            group.execute(&ExecutionContext::default(), &mut sink);
            assert!(rx.try_recv().is_err(), "reported early in cycle {cycle}");
            assert_eq!(group.retry_queue()[0].failures(), cycle);
        }
        group.execute(&ExecutionContext::default(), &mut sink);

        let envelope = rx.recv().await.expect("failure reported");
        assert_eq!(envelope.actor, actor_id);
        assert_eq!(envelope.outcome.transaction_id, stale_id);
        assert_eq!(envelope.outcome.status, TransactionStatus::PermanentlyFailed);
        assert_eq!(envelope.outcome.failures, 5);
        assert_eq!(envelope.outcome.refresh, vec![SlotLocation::new(CHEST, 4)]);
        assert!(envelope
            .outcome
            .reason
            .as_deref()
            .is_some_and(|r| r.contains("retries exhausted")));

        group.execute(&ExecutionContext::default(), &mut sink);
        assert!(rx.try_recv().is_err());
        assert_eq!(world(&group).chest_item(4), Item::air());
    }

    #[test]
    fn test_closed_chest_is_retried_until_reopened() {
        init_test_logging();
        let mut actor = WorldActor::new();
        actor.close_chest();
        let mut group = group(actor);
        let mut sink = RecordingNotifier::new();

        group.add_transaction(edit(CHEST, 0, stone(3), Item::air()));
        group.execute(&ExecutionContext::default(), &mut sink);

        assert!(sink.is_empty());
        assert_eq!(
            group.retry_queue()[0].last_error(),
            Some(&TransactionError::ContainerUnavailable(CHEST))
        );

        if let Some(actor) = group.actor_mut() {
            let mut chest = InMemoryContainer::new(27);
            chest.set_item(0, stone(3), false);
            actor.chest = Some(chest);
        }
        group.execute(&ExecutionContext::default(), &mut sink);

        assert_eq!(sink.outcomes()[0].status, TransactionStatus::Succeeded);
        assert_eq!(world(&group).crafting.total_count(&stone(1)), 3);
    }

    #[test]
    fn test_put_into_closed_chest_keeps_escrowed_content() {
        init_test_logging();
        let mut group = group(WorldActor::new().with_inventory_item(4, stone(12)));
        let mut sink = RecordingNotifier::new();
        let ctx = ExecutionContext::default();

        group.add_transaction(edit(INVENTORY, 4, stone(12), Item::air()));
        group.execute(&ctx, &mut sink);
        assert_eq!(world(&group).crafting.total_count(&stone(1)), 12);

        if let Some(actor) = group.actor_mut() {
            actor.close_chest();
        }
        group.add_transaction(edit(CHEST, 0, Item::air(), stone(12)));
        group.execute(&ctx, &mut sink);

        assert_eq!(world(&group).crafting.total_count(&stone(1)), 12);
        assert_eq!(
            group.retry_queue()[0].last_error(),
            Some(&TransactionError::ContainerUnavailable(CHEST))
        );

        if let Some(actor) = group.actor_mut() {
            actor.chest = Some(InMemoryContainer::new(27));
        }
        group.execute(&ctx, &mut sink);

        assert_eq!(sink.len(), 2);
        assert!(sink
            .outcomes()
            .iter()
            .all(|o| o.status == TransactionStatus::Succeeded));
        assert_eq!(world(&group).chest_item(0), stone(12));
        assert!(world(&group).crafting.is_empty());
    }

    #[test]
    fn test_lower_retry_bound_from_config() {
        init_test_logging();
        let config = TransactionGroupConfig::for_testing();
        let mut group = TransactionGroup::with_config(Some(WorldActor::new()), &config);
        let mut sink = RecordingNotifier::new();

        group.add_transaction(edit(INVENTORY, 0, stone(1), Item::air()));
        for _ in 0..config.allowed_retries {
            group.execute(&config.execution_context(), &mut sink);
        }

        assert_eq!(sink.len(), 1);
        assert_eq!(sink.outcomes()[0].failures, config.allowed_retries);
    }

    // =========================================================================
    // UNRESTRICTED EDITS
    // =========================================================================

    #[test]
    fn test_creative_actor_skips_validation() {
        init_test_logging();
        let mut group = group(WorldActor::new().creative());
        let mut sink = RecordingNotifier::new();

        group.add_transaction(edit(INVENTORY, 8, Item::air(), diamond(64)));
        group.execute(&ExecutionContext::default(), &mut sink);

        assert_eq!(world(&group).inventory.get_item(8), diamond(64));
        assert!(world(&group).crafting.is_empty());
        assert_eq!(sink.outcomes()[0].status, TransactionStatus::Succeeded);
    }

    #[test]
    fn test_cheat_override_from_config() {
        init_test_logging();
        let config = TransactionGroupConfig {
            allow_inventory_cheats: true,
            ..Default::default()
        };
        let mut group = group(WorldActor::new());
        let mut sink = RecordingNotifier::new();

        group.add_transaction(edit(CHEST, 1, diamond(2), Item::air()));
        group.add_transaction(edit(INVENTORY, 0, Item::air(), diamond(5)));
        group.execute(&config.execution_context(), &mut sink);

        assert_eq!(group.last_report().succeeded, 2);
        assert_eq!(world(&group).inventory.get_item(0), diamond(5));
        assert!(world(&group).crafting.is_empty());
    }
}
