//! Order processor: type dispatch → status rule → priority → persistence.
//!
//! A pass fetches one user's orders and walks them in list order. Every
//! per-order failure is absorbed into that order's status and the pass moves
//! on; only a failed fetch aborts the pass.

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{debug, error, info, info_span, warn};

use orderflow_core::UserId;

use crate::collaborators::{
    ApiResponse, ClassificationApi, DatabaseError, ExportFileSystem, OpenMode, OrderDatabase,
};
use crate::export::{export_file_name, export_rows};
use crate::order::{Order, OrderStatus, OrderType, Priority};
use crate::summary::ProcessingSummary;

/// Remote amount at or above which a type-B order can be `PROCESSED`.
pub const REMOTE_AMOUNT_THRESHOLD: f64 = 50.0;

/// Order amount below which a type-B order can be `PROCESSED` (strict).
pub const PROCESSED_ORDER_LIMIT: f64 = 100.0;

/// Batch-level failure of a processing pass.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("failed to fetch orders for user {user_id}")]
    Fetch {
        user_id: UserId,
        #[source]
        source: DatabaseError,
    },
}

/// Drives the per-order decision procedure against the three collaborators.
///
/// Collaborators are taken by value; pass `&T` or `Arc<T>` to keep access to
/// them after construction.
pub struct OrderProcessor<D, A, F> {
    db: D,
    api: A,
    files: F,
    clock: fn() -> DateTime<Utc>,
}

impl<D, A, F> OrderProcessor<D, A, F>
where
    D: OrderDatabase,
    A: ClassificationApi,
    F: ExportFileSystem,
{
    pub fn new(db: D, api: A, files: F) -> Self {
        Self {
            db,
            api,
            files,
            clock: Utc::now,
        }
    }

    /// Replace the clock used to name export artifacts.
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    /// Run one pass over `user_id`'s orders.
    ///
    /// Returns every fetched order with `status` and `priority` assigned, in
    /// the order the database returned them.
    pub fn process(&self, user_id: UserId) -> Result<Vec<Order>, ProcessError> {
        let span = info_span!("process_orders", %user_id);
        let _enter = span.enter();

        let mut orders = self.db.fetch_orders_for_user(user_id).map_err(|source| {
            error!(error = %source, "order fetch failed; aborting pass");
            ProcessError::Fetch { user_id, source }
        })?;

        info!(count = orders.len(), "processing orders");

        for order in orders.iter_mut() {
            self.process_order(order, user_id);
        }

        let summary = ProcessingSummary::from_orders(&orders);
        info!(
            total = summary.total,
            failures = summary.failures,
            high_priority = summary.high_priority,
            "pass complete"
        );

        Ok(orders)
    }

    fn process_order(&self, order: &mut Order, user_id: UserId) {
        order.status = self.decide_status(order, user_id);
        order.priority = Priority::for_amount(order.amount);

        debug!(
            order_id = %order.id,
            order_type = %order.order_type,
            status = %order.status,
            priority = %order.priority,
            "order decided"
        );

        self.persist(order);
    }

    fn decide_status(&self, order: &Order, user_id: UserId) -> OrderStatus {
        match &order.order_type {
            OrderType::A => self.export(order, user_id),
            OrderType::B => self.classify(order),
            OrderType::C => flag_status(order),
            OrderType::Unrecognized(tag) => {
                warn!(order_id = %order.id, tag = %tag, "unrecognized order type");
                OrderStatus::UnknownType
            }
        }
    }

    fn export(&self, order: &Order, user_id: UserId) -> OrderStatus {
        let name = export_file_name(user_id, (self.clock)());

        let Some(mut handle) = self.files.open(&name, OpenMode::Write) else {
            warn!(order_id = %order.id, file = %name, "export artifact could not be opened");
            return OrderStatus::ExportFailed;
        };

        for row in export_rows(order) {
            if let Err(e) = self.files.write_row(&mut handle, &row) {
                warn!(order_id = %order.id, file = %name, error = %e, "export write failed");
                if let Err(e) = self.files.close(handle) {
                    warn!(order_id = %order.id, file = %name, error = %e, "export close after failed write");
                }
                return OrderStatus::ExportFailed;
            }
        }

        match self.files.close(handle) {
            Ok(()) => OrderStatus::Exported,
            Err(e) => {
                warn!(order_id = %order.id, file = %name, error = %e, "export close failed");
                OrderStatus::ExportFailed
            }
        }
    }

    fn classify(&self, order: &Order) -> OrderStatus {
        match self.api.classify(order.id) {
            Ok(response) => classification_status(order, &response),
            Err(e) => {
                warn!(order_id = %order.id, error = %e, "classification call failed");
                OrderStatus::ApiFailure
            }
        }
    }

    fn persist(&self, order: &mut Order) {
        match self.db.update_status(order.id, order.status, order.priority) {
            Ok(true) => {}
            Ok(false) => {
                warn!(order_id = %order.id, "status update matched no stored order");
            }
            Err(e) => {
                warn!(order_id = %order.id, error = %e, "status update failed");
                order.status = OrderStatus::DbError;
            }
        }
    }
}

/// Type-B rule over a response that arrived. First match wins.
pub fn classification_status(order: &Order, response: &ApiResponse) -> OrderStatus {
    if !response.is_success() {
        return OrderStatus::ApiError;
    }

    if response.amount >= REMOTE_AMOUNT_THRESHOLD && order.amount < PROCESSED_ORDER_LIMIT {
        OrderStatus::Processed
    } else if response.amount < REMOTE_AMOUNT_THRESHOLD || order.flag_set() {
        OrderStatus::Pending
    } else {
        OrderStatus::Error
    }
}

/// Type-C rule.
pub fn flag_status(order: &Order) -> OrderStatus {
    if order.flag_set() {
        OrderStatus::Completed
    } else {
        OrderStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::{HashMap, HashSet};

    use chrono::TimeZone;
    use proptest::prelude::*;

    use orderflow_core::OrderId;

    use super::*;
    use crate::collaborators::{ApiError, FileError};
    use crate::export::{EXPORT_HEADER, HIGH_VALUE_NOTE};

    const USER: UserId = UserId::new(314);

    fn fixed_clock() -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000, 0).unwrap()
    }

    fn export_name() -> String {
        export_file_name(USER, fixed_clock())
    }

    /// Database double: scripted fetch result, recorded updates.
    struct RecordingDatabase {
        fetch: Result<Vec<Order>, DatabaseError>,
        failing_updates: HashSet<OrderId>,
        missing_rows: HashSet<OrderId>,
        fetches: Cell<usize>,
        updates: RefCell<Vec<(OrderId, OrderStatus, Priority)>>,
    }

    impl RecordingDatabase {
        fn with_orders(orders: Vec<Order>) -> Self {
            Self {
                fetch: Ok(orders),
                failing_updates: HashSet::new(),
                missing_rows: HashSet::new(),
                fetches: Cell::new(0),
                updates: RefCell::new(Vec::new()),
            }
        }

        fn failing_fetch(err: DatabaseError) -> Self {
            Self {
                fetch: Err(err),
                ..Self::with_orders(vec![])
            }
        }

        fn fail_update(mut self, id: OrderId) -> Self {
            self.failing_updates.insert(id);
            self
        }

        fn missing_row(mut self, id: OrderId) -> Self {
            self.missing_rows.insert(id);
            self
        }

        fn updates(&self) -> Vec<(OrderId, OrderStatus, Priority)> {
            self.updates.borrow().clone()
        }
    }

    impl OrderDatabase for RecordingDatabase {
        fn fetch_orders_for_user(&self, user_id: UserId) -> Result<Vec<Order>, DatabaseError> {
            assert_eq!(user_id, USER);
            self.fetches.set(self.fetches.get() + 1);
            self.fetch.clone()
        }

        fn update_status(
            &self,
            order_id: OrderId,
            status: OrderStatus,
            priority: Priority,
        ) -> Result<bool, DatabaseError> {
            self.updates.borrow_mut().push((order_id, status, priority));
            if self.failing_updates.contains(&order_id) {
                return Err(DatabaseError::Backend("update rejected".into()));
            }
            Ok(!self.missing_rows.contains(&order_id))
        }
    }

    /// API double: scripted per-order outcome, recorded calls.
    #[derive(Default)]
    struct ScriptedApi {
        outcomes: HashMap<OrderId, Result<ApiResponse, ApiError>>,
        calls: RefCell<Vec<OrderId>>,
    }

    impl ScriptedApi {
        fn respond(mut self, id: OrderId, outcome: Result<ApiResponse, ApiError>) -> Self {
            self.outcomes.insert(id, outcome);
            self
        }
    }

    impl ClassificationApi for ScriptedApi {
        fn classify(&self, order_id: OrderId) -> Result<ApiResponse, ApiError> {
            self.calls.borrow_mut().push(order_id);
            self.outcomes
                .get(&order_id)
                .cloned()
                .unwrap_or_else(|| Err(ApiError::Unavailable("unscripted order".into())))
        }
    }

    /// File system double: artifacts kept in memory once closed.
    #[derive(Default)]
    struct MemoryFiles {
        refuse_open: bool,
        fail_on_row: Option<usize>,
        fail_close: bool,
        opened: RefCell<Vec<(String, OpenMode)>>,
        closed: RefCell<HashMap<String, Vec<Vec<String>>>>,
    }

    struct MemoryHandle {
        name: String,
        rows: Vec<Vec<String>>,
    }

    impl ExportFileSystem for MemoryFiles {
        type Handle = MemoryHandle;

        fn open(&self, name: &str, mode: OpenMode) -> Option<Self::Handle> {
            self.opened.borrow_mut().push((name.to_string(), mode));
            if self.refuse_open {
                return None;
            }
            Some(MemoryHandle {
                name: name.to_string(),
                rows: Vec::new(),
            })
        }

        fn write_row(&self, handle: &mut Self::Handle, fields: &[String]) -> Result<(), FileError> {
            if self.fail_on_row == Some(handle.rows.len()) {
                return Err(FileError::Write("disk full".into()));
            }
            handle.rows.push(fields.to_vec());
            Ok(())
        }

        fn close(&self, handle: Self::Handle) -> Result<(), FileError> {
            self.closed.borrow_mut().insert(handle.name, handle.rows);
            if self.fail_close {
                return Err(FileError::Write("flush failed".into()));
            }
            Ok(())
        }
    }

    fn order(id: u64, order_type: &str, amount: f64, flag: Option<bool>) -> Order {
        Order::new(OrderId::new(id), order_type, amount, flag)
    }

    fn run(
        db: &RecordingDatabase,
        api: &ScriptedApi,
        files: &MemoryFiles,
    ) -> Result<Vec<Order>, ProcessError> {
        OrderProcessor::new(db, api, files)
            .with_clock(fixed_clock)
            .process(USER)
    }

    fn run_single(o: Order, api: ScriptedApi) -> (Order, RecordingDatabase) {
        let db = RecordingDatabase::with_orders(vec![o]);
        let files = MemoryFiles::default();
        let mut result = run(&db, &api, &files).unwrap();
        (result.remove(0), db)
    }

    #[test]
    fn type_a_high_value_is_exported_with_annotation() {
        let db = RecordingDatabase::with_orders(vec![order(1, "A", 201.0, Some(true))]);
        let api = ScriptedApi::default();
        let files = MemoryFiles::default();

        let result = run(&db, &api, &files).unwrap();

        assert_eq!(result[0].status, OrderStatus::Exported);
        assert_eq!(result[0].priority, Priority::High);
        assert_eq!(
            db.updates(),
            vec![(OrderId::new(1), OrderStatus::Exported, Priority::High)]
        );

        let closed = files.closed.borrow();
        let rows = closed.get(&export_name()).expect("artifact written");
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], EXPORT_HEADER.map(String::from).to_vec());
        assert_eq!(rows[1], vec!["1", "A", "201", "true", "NEW", "LOW"]);
        assert_eq!(rows[2], HIGH_VALUE_NOTE.map(String::from).to_vec());
        assert_eq!(files.opened.borrow()[0].1, OpenMode::Write);
        assert!(api.calls.borrow().is_empty());
    }

    #[test]
    fn type_a_at_or_below_150_has_no_annotation() {
        let db = RecordingDatabase::with_orders(vec![order(2, "A", 100.0, Some(false))]);
        let files = MemoryFiles::default();

        let result = run(&db, &ScriptedApi::default(), &files).unwrap();

        assert_eq!(result[0].status, OrderStatus::Exported);
        assert_eq!(result[0].priority, Priority::Low);
        let closed = files.closed.borrow();
        let rows = &closed[&export_name()];
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().flatten().all(|f| f != "High value order"));
    }

    #[test]
    fn type_a_open_failure_is_export_failed_without_rows() {
        let db = RecordingDatabase::with_orders(vec![order(3, "A", 50.0, Some(true))]);
        let files = MemoryFiles {
            refuse_open: true,
            ..MemoryFiles::default()
        };

        let result = run(&db, &ScriptedApi::default(), &files).unwrap();

        assert_eq!(result[0].status, OrderStatus::ExportFailed);
        assert_eq!(
            db.updates(),
            vec![(OrderId::new(3), OrderStatus::ExportFailed, Priority::Low)]
        );
        assert_eq!(files.opened.borrow().len(), 1);
        assert!(files.closed.borrow().is_empty());
    }

    #[test]
    fn type_a_write_failure_is_export_failed() {
        let db = RecordingDatabase::with_orders(vec![order(4, "A", 300.0, None)]);
        let files = MemoryFiles {
            fail_on_row: Some(1),
            ..MemoryFiles::default()
        };

        let result = run(&db, &ScriptedApi::default(), &files).unwrap();

        assert_eq!(result[0].status, OrderStatus::ExportFailed);
        assert_eq!(result[0].priority, Priority::High);
        let closed = files.closed.borrow();
        assert_eq!(closed[&export_name()].len(), 1);
    }

    #[test]
    fn type_a_close_failure_after_write_failure_stays_export_failed() {
        let db = RecordingDatabase::with_orders(vec![order(4, "A", 300.0, None)]);
        let files = MemoryFiles {
            fail_on_row: Some(0),
            fail_close: true,
            ..MemoryFiles::default()
        };

        let result = run(&db, &ScriptedApi::default(), &files).unwrap();

        assert_eq!(result[0].status, OrderStatus::ExportFailed);
        assert_eq!(
            db.updates(),
            vec![(OrderId::new(4), OrderStatus::ExportFailed, Priority::High)]
        );
        assert!(files.closed.borrow()[&export_name()].is_empty());
    }

    #[test]
    fn type_a_negative_amount_is_exported_low() {
        let (result, _) = run_single(order(5, "A", -50.0, Some(true)), ScriptedApi::default());
        assert_eq!(result.status, OrderStatus::Exported);
        assert_eq!(result.priority, Priority::Low);
    }

    #[test]
    fn type_b_rule_table() {
        // (order amount, flag, response, expected status, expected priority)
        let cases: Vec<(f64, Option<bool>, ApiResponse, OrderStatus, Priority)> = vec![
            (90.0, Some(false), ApiResponse::success(60.0), OrderStatus::Processed, Priority::Low),
            // PROCESSED wins even when the flag is set.
            (90.0, Some(true), ApiResponse::success(50.0), OrderStatus::Processed, Priority::Low),
            (150.0, Some(false), ApiResponse::success(40.0), OrderStatus::Pending, Priority::Low),
            (90.0, None, ApiResponse::success(49.99), OrderStatus::Pending, Priority::Low),
            (250.0, Some(true), ApiResponse::success(100.0), OrderStatus::Pending, Priority::High),
            (150.0, Some(false), ApiResponse::success(60.0), OrderStatus::Error, Priority::Low),
            (100.0, None, ApiResponse::success(60.0), OrderStatus::Error, Priority::Low),
            (
                50.0,
                Some(true),
                ApiResponse::with_status("failure", 0.0),
                OrderStatus::ApiError,
                Priority::Low,
            ),
            (
                10.0,
                None,
                ApiResponse::with_status("SUCCESS", 80.0),
                OrderStatus::ApiError,
                Priority::Low,
            ),
        ];

        for (amount, flag, response, expected_status, expected_priority) in cases {
            let id = OrderId::new(10);
            let api = ScriptedApi::default().respond(id, Ok(response.clone()));
            let (result, db) = run_single(order(10, "B", amount, flag), api);

            assert_eq!(
                (result.status, result.priority),
                (expected_status, expected_priority),
                "amount={amount} flag={flag:?} response={response:?}"
            );
            assert_eq!(db.updates(), vec![(id, expected_status, expected_priority)]);
        }
    }

    #[test]
    fn type_b_call_failure_is_api_failure_with_own_priority() {
        let id = OrderId::new(11);
        let api = ScriptedApi::default().respond(id, Err(ApiError::Timeout));
        let db = RecordingDatabase::with_orders(vec![order(11, "B", 300.0, Some(false))]);

        let result = run(&db, &api, &MemoryFiles::default()).unwrap();

        assert_eq!(result[0].status, OrderStatus::ApiFailure);
        assert_eq!(result[0].priority, Priority::High);
        assert_eq!(*api.calls.borrow(), vec![id]);
        assert_eq!(db.updates(), vec![(id, OrderStatus::ApiFailure, Priority::High)]);
    }

    #[test]
    fn type_c_follows_tri_state_flag() {
        let cases = [
            (Some(true), 100.0, OrderStatus::Completed, Priority::Low),
            (Some(false), 250.0, OrderStatus::InProgress, Priority::High),
            (None, 100.0, OrderStatus::InProgress, Priority::Low),
        ];

        for (flag, amount, status, priority) in cases {
            let (result, _) = run_single(order(20, "C", amount, flag), ScriptedApi::default());
            assert_eq!((result.status, result.priority), (status, priority), "flag={flag:?}");
        }
    }

    #[test]
    fn unknown_and_empty_types_are_unknown_type() {
        for tag in ["D", "", "a", "AB"] {
            let (result, db) = run_single(order(30, tag, 50.0, Some(true)), ScriptedApi::default());
            assert_eq!(result.status, OrderStatus::UnknownType, "tag={tag:?}");
            assert_eq!(result.priority, Priority::Low);
            assert_eq!(db.updates().len(), 1);
        }
    }

    #[test]
    fn priority_boundaries_across_a_batch() {
        let db = RecordingDatabase::with_orders(vec![
            order(40, "C", 200.0, Some(true)),
            order(41, "C", 201.0, Some(true)),
            order(42, "C", 0.0, Some(true)),
            order(43, "C", 1.0, Some(true)),
        ]);

        let result = run(&db, &ScriptedApi::default(), &MemoryFiles::default()).unwrap();

        let priorities: Vec<_> = result.iter().map(|o| o.priority).collect();
        assert_eq!(
            priorities,
            vec![Priority::Low, Priority::High, Priority::Low, Priority::Low]
        );
        assert!(result.iter().all(|o| o.status == OrderStatus::Completed));
    }

    #[test]
    fn update_failure_overwrites_status_only() {
        let db = RecordingDatabase::with_orders(vec![
            order(50, "A", 250.0, Some(true)),
            order(51, "C", 10.0, Some(true)),
        ])
        .fail_update(OrderId::new(50));

        let result = run(&db, &ScriptedApi::default(), &MemoryFiles::default()).unwrap();

        assert_eq!(result[0].status, OrderStatus::DbError);
        assert_eq!(result[0].priority, Priority::High);
        // The failing order was persisted with its computed status first.
        assert_eq!(db.updates()[0], (OrderId::new(50), OrderStatus::Exported, Priority::High));
        // The batch continued.
        assert_eq!(result[1].status, OrderStatus::Completed);
    }

    #[test]
    fn update_matching_no_row_keeps_computed_status() {
        let db = RecordingDatabase::with_orders(vec![order(60, "A", 201.0, Some(true))])
            .missing_row(OrderId::new(60));

        let result = run(&db, &ScriptedApi::default(), &MemoryFiles::default()).unwrap();

        assert_eq!(result[0].status, OrderStatus::Exported);
        assert_eq!(result[0].priority, Priority::High);
    }

    #[test]
    fn failed_states_are_still_persisted_once() {
        let db = RecordingDatabase::with_orders(vec![
            order(70, "A", 10.0, None),
            order(71, "B", 10.0, None),
            order(72, "?", 10.0, None),
        ]);
        let files = MemoryFiles {
            refuse_open: true,
            ..MemoryFiles::default()
        };

        run(&db, &ScriptedApi::default(), &files).unwrap();

        let persisted: Vec<_> = db.updates().into_iter().map(|(id, s, _)| (id.get(), s)).collect();
        assert_eq!(
            persisted,
            vec![
                (70, OrderStatus::ExportFailed),
                (71, OrderStatus::ApiFailure),
                (72, OrderStatus::UnknownType),
            ]
        );
    }

    #[test]
    fn mixed_batch_keeps_list_order_and_side_effect_counts() {
        let db = RecordingDatabase::with_orders(vec![
            order(80, "C", 1.0, Some(true)),
            order(81, "A", 160.0, None),
            order(82, "B", 90.0, None),
            order(83, "A", 20.0, Some(true)),
        ]);
        let api = ScriptedApi::default().respond(OrderId::new(82), Ok(ApiResponse::success(60.0)));
        let files = MemoryFiles::default();

        let result = run(&db, &api, &files).unwrap();

        let ids: Vec<_> = result.iter().map(|o| o.id.get()).collect();
        assert_eq!(ids, vec![80, 81, 82, 83]);
        assert_eq!(files.opened.borrow().len(), 2);
        assert_eq!(api.calls.borrow().len(), 1);
        assert_eq!(db.updates().len(), 4);
        assert_eq!(db.fetches.get(), 1);
    }

    #[test]
    fn empty_order_list_is_empty_result() {
        let db = RecordingDatabase::with_orders(vec![]);
        let result = run(&db, &ScriptedApi::default(), &MemoryFiles::default()).unwrap();
        assert!(result.is_empty());
        assert!(db.updates().is_empty());
    }

    #[test]
    fn fetch_failure_aborts_the_pass() {
        let db = RecordingDatabase::failing_fetch(DatabaseError::Unavailable("down".into()));

        let err = run(&db, &ScriptedApi::default(), &MemoryFiles::default()).unwrap_err();

        match err {
            ProcessError::Fetch { user_id, source } => {
                assert_eq!(user_id, USER);
                assert_eq!(source, DatabaseError::Unavailable("down".into()));
            }
        }
        assert!(db.updates().is_empty());
    }

    fn unrecognized_tag() -> impl Strategy<Value = String> {
        "[A-Za-z0-9]{0,3}".prop_filter("must not be a known type", |t| {
            !matches!(t.as_str(), "A" | "B" | "C")
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: any unrecognized type ends as UNKNOWN_TYPE regardless of amount/flag.
        #[test]
        fn unrecognized_types_are_always_unknown(
            tag in unrecognized_tag(),
            amount in -10_000.0f64..10_000.0,
            flag in proptest::option::of(any::<bool>()),
        ) {
            let (result, _) = run_single(order(90, &tag, amount, flag), ScriptedApi::default());
            prop_assert_eq!(result.status, OrderStatus::UnknownType);
        }

        /// Property: priority is HIGH iff amount > 200, for every order type.
        #[test]
        fn priority_tracks_amount_only(
            tag in prop_oneof![Just("A"), Just("B"), Just("C"), Just("X")],
            amount in -1_000.0f64..1_000.0,
            flag in proptest::option::of(any::<bool>()),
        ) {
            let (result, _) = run_single(order(91, tag, amount, flag), ScriptedApi::default());
            prop_assert_eq!(result.priority == Priority::High, amount > 200.0);
        }

        /// Property: a failed update yields DB_ERROR and never touches priority.
        #[test]
        fn db_failure_never_changes_priority(
            tag in prop_oneof![Just("A"), Just("B"), Just("C"), Just("")],
            amount in -1_000.0f64..1_000.0,
        ) {
            let db = RecordingDatabase::with_orders(vec![order(92, tag, amount, None)])
                .fail_update(OrderId::new(92));
            let result = run(&db, &ScriptedApi::default(), &MemoryFiles::default()).unwrap();

            prop_assert_eq!(result[0].status, OrderStatus::DbError);
            prop_assert_eq!(result[0].priority, Priority::for_amount(amount));
            prop_assert_eq!(db.updates()[0].2, result[0].priority);
        }
    }
}
