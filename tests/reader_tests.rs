use shortpath::graph::Graph;
use shortpath::io::{read_list_graph, read_matrix_graph, TextGraphs};
use shortpath::{depth_first_order, Error};

const WEIGHTED: &str = "\
5
Aurora and 85th
Green Lake Starbucks
Woodland Park Zoo
Troll under bridge
PCC
1 2 50
1 3 20
1 5 30
2 4 10
3 2 10
4 5 15
5 2 20
5 3 10
0 0 0
";

const UNWEIGHTED: &str = "\
4
Downtown
University district
Ballard
Fremont
1 2
2 3
3 1
1 4
0 0
";

#[test]
fn test_weighted_description_end_to_end() {
    let graph = read_matrix_graph(WEIGHTED.as_bytes()).unwrap();

    assert_eq!(graph.node_count(), 5);
    assert_eq!(graph.label(1).unwrap().to_string(), "Aurora and 85th");
    assert_eq!(graph.label(5).unwrap().to_string(), "PCC");

    let route = graph.route(1, 4).unwrap().expect("path should exist");
    assert_eq!(route.distance, 40, "1->3->2->4 beats the heavier routes");
    assert_eq!(route.nodes, vec![1, 3, 2, 4]);

    let route = graph.route(2, 5).unwrap().expect("path should exist");
    assert_eq!(route.distance, 25);
    assert_eq!(route.nodes, vec![2, 4, 5]);

    assert_eq!(
        graph.route(2, 1).unwrap(),
        None,
        "nothing leads back to node 1"
    );
}

#[test]
fn test_unweighted_description_end_to_end() {
    let graph = read_list_graph(UNWEIGHTED.as_bytes()).unwrap();

    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.label(3).unwrap().to_string(), "Ballard");
    assert_eq!(graph.neighbors(1).collect::<Vec<_>>(), vec![4, 2]);
    assert_eq!(depth_first_order(&graph), vec![1, 4, 2, 3]);
}

#[test]
fn test_rejected_edge_records_are_skipped_not_fatal() {
    let input = "\
3
One
Two
Three
1 2 5
2 2 9
7 1 4
1 3 -2
2 3 8
0 0 0
";
    let graph = read_matrix_graph(input.as_bytes()).unwrap();

    let route = graph.route(1, 3).unwrap().expect("good records survive");
    assert_eq!(route.distance, 13, "only the valid edges should be present");
    assert_eq!(route.nodes, vec![1, 2, 3]);
    assert_eq!(
        graph.route(2, 2).unwrap().map(|route| route.distance),
        Some(0),
        "the rejected self-loop must not register an edge"
    );
}

#[test]
fn test_multiple_descriptions_until_stream_terminator() {
    let input = "\
2
First A
First B
1 2 5
0 0 0
3
Second A
Second B
Second C
1 3 2
0 0 0
0
";
    let mut graphs = TextGraphs::new(input.as_bytes());

    let first = graphs.next_matrix().unwrap().expect("first description");
    assert_eq!(first.node_count(), 2);
    assert_eq!(
        first.route(1, 2).unwrap().map(|route| route.distance),
        Some(5)
    );

    let second = graphs.next_matrix().unwrap().expect("second description");
    assert_eq!(second.node_count(), 3);
    assert_eq!(
        second.route(1, 3).unwrap().map(|route| route.distance),
        Some(2)
    );

    assert!(graphs.next_matrix().unwrap().is_none(), "stream is done");
}

#[test]
fn test_empty_input_yields_no_graphs() {
    let mut graphs = TextGraphs::new("".as_bytes());
    assert!(graphs.next_matrix().unwrap().is_none());
    assert!(graphs.next_list().unwrap().is_none());
}

#[test]
fn test_malformed_count_token_is_an_error() {
    let result = read_matrix_graph("abc\n".as_bytes());
    assert!(matches!(result, Err(Error::Malformed { line: 1, .. })));
}

#[test]
fn test_negative_count_is_an_error() {
    let result = read_matrix_graph("-2\n".as_bytes());
    assert!(matches!(result, Err(Error::Malformed { .. })));
}

#[test]
fn test_oversized_count_is_reported_explicitly() {
    let result = read_matrix_graph("101\n".as_bytes());
    assert!(matches!(
        result,
        Err(Error::InvalidNodeCount { requested: 101, .. })
    ));
}

#[test]
fn test_truncated_edge_record_is_an_error() {
    let input = "\
2
One
Two
1
";
    let result = read_matrix_graph(input.as_bytes());
    assert!(matches!(result, Err(Error::UnexpectedEof)));
}

#[test]
fn test_missing_label_line_is_an_error() {
    let result = read_list_graph("3\nOnly one label\n".as_bytes());
    assert!(matches!(result, Err(Error::UnexpectedEof)));
}
