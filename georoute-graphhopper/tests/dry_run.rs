//! Dry runs through the real HTTP client.

use georoute_core::Waypoint;
use georoute_graphhopper::{
    DirectionsOptions, GraphHopper, GraphHopperConfig, IsochroneOptions, MatrixOptions, Profile,
};
use rstest::{fixture, rstest};

#[fixture]
fn graphhopper() -> GraphHopper {
    GraphHopper::new(GraphHopperConfig::new().with_base_url("http://localhost:8989/"))
        .expect("self-hosted config builds")
}

#[rstest]
#[tokio::test]
async fn directions_dry_run_shows_full_url_and_body(graphhopper: GraphHopper) {
    let description = graphhopper
        .directions(
            &[Waypoint::new(52.5, 13.4), Waypoint::new(52.6, 13.5)],
            &Profile::Car,
            &DirectionsOptions::default(),
            true,
        )
        .await
        .expect("dry run never fails")
        .into_description()
        .expect("dry run describes the request");

    let (head, body) = description.split_once('\n').expect("POST has a body");
    assert_eq!(head, "POST http://localhost:8989/route");
    let body: serde_json::Value = serde_json::from_str(body).expect("body is JSON");
    assert_eq!(body["points"][0], serde_json::json!([13.4, 52.5]));
}

#[rstest]
#[tokio::test]
async fn isochrone_dry_run_encodes_the_query(graphhopper: GraphHopper) {
    let description = graphhopper
        .reachability(
            Waypoint::new(52.5, 13.4),
            &Profile::Bike,
            &[900.0],
            &IsochroneOptions::default(),
            true,
        )
        .await
        .expect("dry run never fails")
        .into_description()
        .expect("dry run describes the request");

    assert_eq!(
        description,
        "GET http://localhost:8989/isochrone?point=52.5%2C13.4&profile=bike&time_limit=900"
    );
}

#[rstest]
#[tokio::test]
async fn matrix_dry_run_never_contacts_the_server(graphhopper: GraphHopper) {
    let outcome = graphhopper
        .matrix(
            &[Waypoint::new(52.5, 13.4), Waypoint::new(52.6, 13.5)],
            &Profile::Foot,
            &MatrixOptions::default(),
            true,
        )
        .await
        .expect("dry run never fails");

    assert!(outcome.is_dry_run());
}
