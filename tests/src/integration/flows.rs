//! # Lifecycle Flow Tests
//!
//! Drives the provenance service end-to-end through its public API with the
//! in-memory adapters: farmer creates, driver hauls, retailer receives and
//! sells, and the read side reconstructs the full trail.

#[cfg(test)]
mod tests {
    use batch_provenance::{
        BatchSpec, BatchStatus, Caller, EventType, FixedTimeSource, GeoPoint,
        InMemoryLedgerStore, OrgPolicy, ProvenanceApi, ProvenanceDependencies,
        ProvenanceQueryApi, ProvenanceService, TelemetryReading, TransferType,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "info".into()),
            )
            .with_test_writer()
            .try_init();
    }

    fn make_service() -> ProvenanceService<InMemoryLedgerStore, FixedTimeSource> {
        ProvenanceService::new(
            ProvenanceDependencies {
                store: InMemoryLedgerStore::new(),
                time: FixedTimeSource::new("2026-03-01T06:00:00Z"),
            },
            OrgPolicy::default(),
        )
    }

    fn farmer() -> Caller {
        Caller::new("x509::CN=farmer-1::FarmerOrg", "FarmerOrgMSP")
    }

    fn driver() -> Caller {
        Caller::new("x509::CN=driver-7::DriverOrg", "DriverOrgMSP")
    }

    fn retailer() -> Caller {
        Caller::new("x509::CN=retailer-3::RetailerOrg", "RetailerOrgMSP")
    }

    fn tomato_spec(batch_id: &str) -> BatchSpec {
        BatchSpec {
            batch_id: batch_id.to_string(),
            farmer_id: "F-42".to_string(),
            farmer_name: "A. Devi".to_string(),
            agri_stack_id: "AS-2209".to_string(),
            crop: "Tomato".to_string(),
            variety: "Roma".to_string(),
            quantity: 250.0,
            unit: "kg".to_string(),
            harvest_date: "2026-02-28".to_string(),
            origin: GeoPoint::new(12.9716, 77.5946),
            origin_address: "Field 3, Hosur Rd, Bengaluru".to_string(),
        }
    }

    /// Drive one batch through the complete happy path.
    fn run_full_lifecycle(
        service: &mut ProvenanceService<InMemoryLedgerStore, FixedTimeSource>,
        batch_id: &str,
    ) {
        service.create_batch(&farmer(), tomato_spec(batch_id)).unwrap();
        service
            .record_pickup(
                &driver(),
                batch_id,
                "R. Kumar",
                GeoPoint::new(12.98, 77.60),
                "loaded at farm gate",
            )
            .unwrap();
        service
            .record_transit_update(
                &driver(),
                batch_id,
                "R. Kumar",
                GeoPoint::new(13.05, 77.65),
                TelemetryReading::new(4.2, 82.0),
                "reefer holding 4C",
            )
            .unwrap();
        service
            .record_delivery(
                &driver(),
                batch_id,
                "R. Kumar",
                GeoPoint::new(13.08, 77.70),
                "dock 2",
            )
            .unwrap();
        service
            .record_receipt(
                &retailer(),
                batch_id,
                "S. Rao",
                GeoPoint::new(13.08, 77.70),
                "checked in",
            )
            .unwrap();
        service
            .record_sale(&retailer(), batch_id, "S. Rao", "till 4")
            .unwrap();
    }

    // =============================================================================
    // FLOWS
    // =============================================================================

    #[test]
    fn farm_to_sale_flow_reconstructs_the_full_trail() {
        init_tracing();
        let mut service = make_service();

        run_full_lifecycle(&mut service, "LOT-2026-001");

        let batch = service.get_batch("LOT-2026-001").unwrap();
        assert_eq!(batch.status, BatchStatus::Sold);
        assert_eq!(batch.current_org, "RetailerOrgMSP");

        // One event per step, telemetry only where recorded.
        let events = service.get_journey_events("LOT-2026-001").unwrap();
        assert_eq!(events.len(), 6);
        let update = events
            .iter()
            .find(|e| e.event_type == EventType::TransitUpdate)
            .unwrap();
        assert_eq!(update.temperature, 4.2);
        assert_eq!(update.humidity, 82.0);
        let sale = events
            .iter()
            .find(|e| e.event_type == EventType::Sold)
            .unwrap();
        assert_eq!(sale.latitude, 0.0);
        assert_eq!(sale.temperature, 0.0);

        // Custody changed exactly twice.
        let transfers = service.get_transfers("LOT-2026-001").unwrap();
        assert_eq!(transfers.len(), 2);
        assert_eq!(transfers[0].transfer_type, TransferType::Pickup);
        assert_eq!(transfers[1].transfer_type, TransferType::Receipt);

        // Five batch versions: create, pickup, delivery, receipt, sale.
        // The transit update wrote no batch version.
        let history = service.get_batch_history("LOT-2026-001").unwrap();
        assert_eq!(history.len(), 5);
        let statuses: Vec<_> = history
            .iter()
            .map(|rev| rev.value.as_ref().unwrap().status)
            .collect();
        assert_eq!(
            statuses,
            vec![
                BatchStatus::Created,
                BatchStatus::InTransit,
                BatchStatus::Delivered,
                BatchStatus::Received,
                BatchStatus::Sold,
            ]
        );
    }

    #[test]
    fn out_of_order_and_wrong_org_invocations_are_rejected() {
        init_tracing();
        let mut service = make_service();

        service.create_batch(&farmer(), tomato_spec("LOT-X")).unwrap();

        // Delivery before pickup: conflict, status unchanged.
        let err = service
            .record_delivery(&driver(), "LOT-X", "R. Kumar", GeoPoint::default(), "")
            .unwrap_err();
        assert!(err.is_conflict());
        assert_eq!(service.get_batch("LOT-X").unwrap().status, BatchStatus::Created);

        // Pickup succeeds and records the first transfer.
        service
            .record_pickup(&driver(), "LOT-X", "R. Kumar", GeoPoint::default(), "")
            .unwrap();
        assert_eq!(
            service.get_batch("LOT-X").unwrap().status,
            BatchStatus::InTransit
        );

        // Receipt while in transit: conflict.
        let err = service
            .record_receipt(&retailer(), "LOT-X", "S. Rao", GeoPoint::default(), "")
            .unwrap_err();
        assert!(err.is_conflict());

        // Wrong org for delivery: rejected, nothing recorded.
        let err = service
            .record_delivery(&retailer(), "LOT-X", "S. Rao", GeoPoint::default(), "")
            .unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(service.get_journey_events("LOT-X").unwrap().len(), 2);

        // Carrier finishes the haul; retailer takes over.
        service
            .record_delivery(&driver(), "LOT-X", "R. Kumar", GeoPoint::default(), "")
            .unwrap();
        service
            .record_receipt(&retailer(), "LOT-X", "S. Rao", GeoPoint::default(), "")
            .unwrap();
        let batch = service
            .record_sale(&retailer(), "LOT-X", "S. Rao", "")
            .unwrap();
        assert_eq!(batch.status, BatchStatus::Sold);

        let transfers = service.get_transfers("LOT-X").unwrap();
        assert_eq!(transfers.len(), 2);
    }

    #[test]
    fn per_batch_queries_stay_isolated_across_batches() {
        init_tracing();
        let mut service = make_service();

        run_full_lifecycle(&mut service, "LOT-A");
        service.create_batch(&farmer(), tomato_spec("LOT-B")).unwrap();
        service
            .record_pickup(&driver(), "LOT-B", "R. Kumar", GeoPoint::default(), "")
            .unwrap();

        assert_eq!(service.get_journey_events("LOT-A").unwrap().len(), 6);
        assert_eq!(service.get_journey_events("LOT-B").unwrap().len(), 2);
        assert_eq!(service.get_transfers("LOT-B").unwrap().len(), 1);
        assert!(service
            .get_journey_events("LOT-A")
            .unwrap()
            .iter()
            .all(|e| e.batch_id == "LOT-A"));

        let sold = service.query_batches_by_status(BatchStatus::Sold).unwrap();
        assert_eq!(sold.len(), 1);
        assert_eq!(sold[0].batch_id, "LOT-A");

        let driver_owned = service.query_batches_by_org("DriverOrgMSP").unwrap();
        assert_eq!(driver_owned.len(), 1);
        assert_eq!(driver_owned[0].batch_id, "LOT-B");
    }

    #[test]
    fn stored_documents_keep_the_wire_field_contract() {
        init_tracing();
        let mut service = make_service();
        run_full_lifecycle(&mut service, "LOT-W");

        let batch = service.get_batch("LOT-W").unwrap();
        let json: serde_json::Value = serde_json::to_value(&batch).unwrap();
        assert_eq!(json["docType"], "batch");
        assert_eq!(json["batchId"], "LOT-W");
        assert_eq!(json["status"], "sold");
        assert_eq!(json["currentOrg"], "RetailerOrgMSP");
        assert_eq!(json["updatedAt"], "2026-03-01T06:00:00Z");

        let transfers = service.get_transfers("LOT-W").unwrap();
        let json: serde_json::Value = serde_json::to_value(&transfers[0]).unwrap();
        assert_eq!(json["docType"], "transfer");
        assert_eq!(json["transferType"], "pickup");
        assert_eq!(json["fromOrg"], "FarmerOrgMSP");
        assert_eq!(json["toOrg"], "DriverOrgMSP");
    }
}
