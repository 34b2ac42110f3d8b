mod common;

use common::Feed;
use halte::shared::Coordinate;

fn feed() -> Feed {
    Feed::new()
        .trips(
            "R1,WEEK,T1,Quévert,0,OUT\n\
             R1,WEEK,T2,Quévert,0,OUT\n\
             R1,WEEK,T3,Gare,1,BACK\n\
             R1,SUN,T4,Gare,1,OUT\n\
             R1,WEEK,T5,Gare,1,\n\
             R1,WEEK,T6,Gare,1,GHOST\n\
             R2,WEEK,T7,Hôpital,0,H\n",
        )
        .shapes(
            "OUT,48.3,-2.3,30\n\
             BACK,48.9,-2.9,2\n\
             OUT,48.1,-2.1,10\n\
             H,48.5,-2.5,1\n\
             OUT,48.2,-2.2,20\n\
             BACK,48.8,-2.8,1\n",
        )
}

#[test]
fn trip_shape_is_ordered_by_sequence() {
    let repo = feed().repository();
    let points = repo.shape_by_trip_id("T1");
    assert_eq!(
        points,
        &[
            Coordinate::new(48.1, -2.1),
            Coordinate::new(48.2, -2.2),
            Coordinate::new(48.3, -2.3),
        ]
    );
}

#[test]
fn trip_without_shape_is_empty() {
    let repo = feed().repository();
    assert!(repo.shape_by_trip_id("T5").is_empty());
    assert!(repo.shape_by_trip_id("T6").is_empty());
    assert!(repo.shape_by_trip_id("NOPE").is_empty());
}

#[test]
fn route_shapes_are_distinct_and_in_first_use_order() {
    let repo = feed().repository();
    let shapes = repo.shapes_by_route_id("R1");
    let ids: Vec<_> = shapes.iter().map(|shape| shape.shape_id).collect();
    // GHOST has no points and is left out
    assert_eq!(ids, vec!["OUT", "BACK"]);
    assert_eq!(shapes[1].points.len(), 2);
    assert_eq!(shapes[1].points[0], Coordinate::new(48.8, -2.8));
    assert!(shapes.iter().all(|shape| shape.color == "654897"));
    assert_eq!(shapes[0].css_color(), "#654897");
}

#[test]
fn route_without_color_gets_black() {
    let repo = feed().repository();
    let shapes = repo.shapes_by_route_id("R2");
    assert_eq!(shapes.len(), 1);
    assert_eq!(shapes[0].color, "000000");
    assert_eq!(shapes[0].css_color(), "#000000");
}

#[test]
fn unknown_route_has_no_shapes() {
    let repo = feed().repository();
    assert!(repo.shapes_by_route_id("R9").is_empty());
}

#[test]
fn shared_shape_is_listed_once() {
    let trips: String = (0..2000)
        .map(|i| format!("R1,WEEK,T{i},Quévert,0,OUT\n"))
        .collect();
    let repo = feed().trips(&trips).repository();
    let shapes = repo.shapes_by_route_id("R1");
    assert_eq!(shapes.len(), 1);
    assert_eq!(shapes[0].points.len(), 3);
}

#[test]
fn malformed_points_coerce_to_zero() {
    let repo = Feed::new()
        .trips("R1,WEEK,T1,Gare,0,S\n")
        .shapes(
            "S,north,-2.1,2\n\
             S,48.1,-2.1,x\n",
        )
        .repository();
    let points = repo.shape_by_trip_id("T1");
    assert_eq!(
        points,
        &[Coordinate::new(48.1, -2.1), Coordinate::new(0.0, -2.1)]
    );
}
