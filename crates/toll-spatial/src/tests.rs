//! Unit tests for toll-spatial.
//!
//! All tests use hand-placed points around the default Bangalore gates.

#[cfg(test)]
mod helpers {
    use toll_core::{GateId, GeoPoint};

    use crate::{GateTable, TollGate};

    /// The four gates of the default scenario, in table order.
    pub fn bangalore_gates() -> GateTable {
        GateTable::new(vec![
            TollGate::new(GateId(1), GeoPoint::new(12.9716, 77.5899), 5.0),
            TollGate::new(GateId(2), GeoPoint::new(12.9781, 77.5946), 7.0),
            TollGate::new(GateId(3), GeoPoint::new(12.9750, 77.5800), 6.0),
            TollGate::new(GateId(4), GeoPoint::new(12.9680, 77.5850), 8.0),
        ])
        .unwrap()
    }
}

// ── Route ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod route {
    use toll_core::GeoPoint;

    use super::helpers::bangalore_gates;
    use crate::{Route, SpatialError};

    #[test]
    fn single_point_is_degenerate() {
        let err = Route::new(vec![GeoPoint::new(12.0, 77.0)]).unwrap_err();
        assert!(matches!(err, SpatialError::DegenerateRoute { points: 1, .. }));
    }

    #[test]
    fn repeated_point_is_degenerate() {
        let p = GeoPoint::new(12.0, 77.0);
        assert!(Route::new(vec![p, p, p]).is_err());
        assert!(Route::new(vec![]).is_err());
    }

    #[test]
    fn length_is_sum_of_great_circle_segments() {
        let a = GeoPoint::new(12.0, 77.0);
        let b = GeoPoint::new(12.0, 77.1);
        let c = GeoPoint::new(12.1, 77.1);
        let route = Route::new(vec![a, b, c]).unwrap();
        let expected = a.distance_km(b) + b.distance_km(c);
        assert!((route.length_km() - expected).abs() < 1e-9);
    }

    #[test]
    fn interpolate_endpoints() {
        let a = GeoPoint::new(12.1, 77.2);
        let b = GeoPoint::new(12.9, 77.7);
        let route = Route::through_gates(a, &bangalore_gates(), b).unwrap();
        assert!(route.interpolate(0.0).approx_eq(a, 1e-12));
        assert!(route.interpolate(1.0).approx_eq(b, 1e-12));
    }

    #[test]
    fn interpolate_clamps_out_of_range_fractions() {
        let a = GeoPoint::new(12.0, 77.0);
        let b = GeoPoint::new(12.0, 77.5);
        let route = Route::new(vec![a, b]).unwrap();
        assert_eq!(route.interpolate(-0.5), a);
        assert_eq!(route.interpolate(3.0), b);
        assert_eq!(route.interpolate(f64::NAN), a);
    }

    #[test]
    fn interpolate_hits_interior_vertex() {
        let a = GeoPoint::new(12.0, 77.0);
        let b = GeoPoint::new(12.0, 77.1);
        let c = GeoPoint::new(12.2, 77.1);
        let route = Route::new(vec![a, b, c]).unwrap();
        let at_b = route.point_at_km(a.distance_km(b));
        assert!(at_b.approx_eq(b, 1e-9), "got {at_b}");
    }

    #[test]
    fn interpolate_midpoint_of_single_segment() {
        let a = GeoPoint::new(12.0, 77.0);
        let b = GeoPoint::new(12.0, 77.2);
        let route = Route::new(vec![a, b]).unwrap();
        assert!(route.interpolate(0.5).approx_eq(GeoPoint::new(12.0, 77.1), 1e-9));
    }

    #[test]
    fn through_gates_orders_vertices() {
        let gates = bangalore_gates();
        let start = GeoPoint::new(12.5, 77.5);
        let end = GeoPoint::new(12.6, 77.6);
        let route = Route::through_gates(start, &gates, end).unwrap();
        let pts = route.points();
        assert_eq!(pts.len(), 6);
        assert_eq!(pts[0], start);
        assert_eq!(pts[1], GeoPoint::new(12.9716, 77.5899));
        assert_eq!(pts[4], GeoPoint::new(12.9680, 77.5850));
        assert_eq!(pts[5], end);
    }
}

// ── GateZone ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod zone {
    use toll_core::GeoPoint;

    use crate::{GateZone, Route, SpatialError};

    fn gate_zone() -> GateZone {
        GateZone::new(GeoPoint::new(12.9716, 77.5899), 0.001).unwrap()
    }

    #[test]
    fn invalid_radius_rejected() {
        let c = GeoPoint::new(0.0, 0.0);
        assert!(matches!(GateZone::new(c, 0.0), Err(SpatialError::InvalidRadius(_))));
        assert!(GateZone::new(c, -1.0).is_err());
        assert!(GateZone::new(c, f64::INFINITY).is_err());
    }

    #[test]
    fn straight_crossing_clips_a_chord() {
        let zone = gate_zone();
        let a = GeoPoint::new(12.9716, 77.5849);
        let b = GeoPoint::new(12.9716, 77.5949);
        let (entry, exit) = zone.clip_segment(a, b).unwrap();
        assert!(entry.approx_eq(GeoPoint::new(12.9716, 77.5889), 1e-9), "entry {entry}");
        assert!(exit.approx_eq(GeoPoint::new(12.9716, 77.5909), 1e-9), "exit {exit}");
    }

    #[test]
    fn miss_returns_none() {
        let zone = gate_zone();
        let a = GeoPoint::new(12.9731, 77.5849); // 0.0015° north of the gate
        let b = GeoPoint::new(12.9731, 77.5949);
        assert!(zone.clip_segment(a, b).is_none());
    }

    #[test]
    fn segment_ending_before_zone_returns_none() {
        let zone = gate_zone();
        let a = GeoPoint::new(12.9716, 77.5800);
        let b = GeoPoint::new(12.9716, 77.5850);
        assert!(zone.clip_segment(a, b).is_none());
    }

    #[test]
    fn segment_fully_inside_is_kept_whole() {
        let zone = gate_zone();
        let a = GeoPoint::new(12.9716, 77.58985);
        let b = GeoPoint::new(12.9716, 77.58995);
        assert_eq!(zone.clip_segment(a, b), Some((a, b)));
    }

    #[test]
    fn route_through_gate_vertex_is_one_piece() {
        let zone = gate_zone();
        let route = Route::new(vec![
            GeoPoint::new(12.9716, 77.5800),
            GeoPoint::new(12.9716, 77.5899), // the gate itself
            GeoPoint::new(12.9800, 77.5899),
        ])
        .unwrap();
        let clip = zone.clip_route(&route);
        assert_eq!(clip.pieces.len(), 1);
        assert_eq!(clip.pieces[0].len(), 3);

        let expected = GeoPoint::new(12.9716, 77.5889).distance_km(GeoPoint::new(12.9716, 77.5899))
            + GeoPoint::new(12.9716, 77.5899).distance_km(GeoPoint::new(12.9726, 77.5899));
        assert!((clip.length_km() - expected).abs() < 1e-6, "got {}", clip.length_km());
    }

    #[test]
    fn separate_passes_are_separate_pieces() {
        let zone = gate_zone();
        let route = Route::new(vec![
            GeoPoint::new(12.9716, 77.5849),
            GeoPoint::new(12.9716, 77.5949),
            GeoPoint::new(12.9800, 77.5949),
            GeoPoint::new(12.9800, 77.5849),
            GeoPoint::new(12.9716, 77.5849),
            GeoPoint::new(12.9716, 77.5949),
        ])
        .unwrap();
        let clip = zone.clip_route(&route);
        assert_eq!(clip.pieces.len(), 2);
    }

    #[test]
    fn empty_clip_has_zero_length() {
        let zone = gate_zone();
        let route = Route::new(vec![GeoPoint::new(12.0, 77.0), GeoPoint::new(12.1, 77.1)]).unwrap();
        let clip = zone.clip_route(&route);
        assert!(clip.is_empty());
        assert_eq!(clip.length_km(), 0.0);
    }
}

// ── GateTable ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod gate_table {
    use toll_core::{GateId, GeoPoint};

    use super::helpers::bangalore_gates;
    use crate::{GateTable, Route, SpatialError, TollGate};

    #[test]
    fn duplicate_gate_rejected() {
        let p = GeoPoint::new(12.0, 77.0);
        let err = GateTable::new(vec![
            TollGate::new(GateId(1), p, 5.0),
            TollGate::new(GateId(1), p, 6.0),
        ])
        .unwrap_err();
        assert!(matches!(err, SpatialError::DuplicateGate(GateId(1))));
    }

    #[test]
    fn negative_rate_rejected() {
        let p = GeoPoint::new(12.0, 77.0);
        assert!(GateTable::new(vec![TollGate::new(GateId(9), p, -1.0)]).is_err());
    }

    #[test]
    fn lookup_by_id() {
        let gates = bangalore_gates();
        assert_eq!(gates.len(), 4);
        assert_eq!(gates.get(GateId(2)).unwrap().rate_per_km, 7.0);
        assert!(matches!(gates.get(GateId(99)), Err(SpatialError::UnknownGate(GateId(99)))));
    }

    #[test]
    fn route_through_all_gates_finds_all_in_order() {
        let gates = bangalore_gates();
        let route = Route::through_gates(
            GeoPoint::new(12.2, 77.3),
            &gates,
            GeoPoint::new(12.8, 77.9),
        )
        .unwrap();
        let ids: Vec<GateId> = gates.candidates_near(&route, 0.001).iter().map(|g| g.id).collect();
        assert_eq!(ids, [GateId(1), GateId(2), GateId(3), GateId(4)]);
    }

    #[test]
    fn distant_route_has_no_candidates() {
        let gates = bangalore_gates();
        let route = Route::new(vec![GeoPoint::new(12.0, 77.0), GeoPoint::new(12.1, 77.1)]).unwrap();
        assert!(gates.candidates_near(&route, 0.001).is_empty());
    }

    #[test]
    fn empty_table() {
        let gates = GateTable::new(vec![]).unwrap();
        assert!(gates.is_empty());
        let route = Route::new(vec![GeoPoint::new(12.0, 77.0), GeoPoint::new(12.1, 77.1)]).unwrap();
        assert!(gates.candidates_near(&route, 0.001).is_empty());
    }
}
