use super::*;

#[test]
fn test_ray_stops_at_edge() {
    let cells: Vec<Cell> = Ray::new(Cell::new(0, 0), (1, 0), 3, 2).collect();
    assert_eq!(cells, vec![Cell::new(1, 0), Cell::new(2, 0)]);
}

#[test]
fn test_ray_off_board_immediately() {
    assert_eq!(Ray::new(Cell::new(0, 0), (-1, 0), 3, 2).count(), 0);
    assert_eq!(Ray::new(Cell::new(2, 1), (1, 1), 3, 2).count(), 0);
}

#[test]
fn test_diagonal_ray() {
    let cells: Vec<Cell> = Ray::new(Cell::new(0, 0), (1, 1), 4, 4).collect();
    assert_eq!(cells, vec![Cell::new(1, 1), Cell::new(2, 2), Cell::new(3, 3)]);
}

#[test]
fn test_ray_is_fused() {
    let mut ray = Ray::new(Cell::new(1, 0), (0, -1), 3, 3);
    assert_eq!(ray.next(), None);
    assert_eq!(ray.next(), None);
}

#[test]
fn test_queen_rays_cover_board_from_center() {
    // From the center of a 3x3 board every other cell is one step away.
    let total: usize = queen_rays(Cell::new(1, 1), 3, 3).map(|r| r.count()).sum();
    assert_eq!(total, 8);
}
