//! Randomized intersection properties.
//!
//! Every trial picks a crossing point `x` and two line origins, and derives the directions from
//! them. Trials where the lines are nearly parallel, or an origin nearly coincides with `x`, are
//! resampled, since the expected values are ill-conditioned there.

use approx::assert_relative_eq;
use rigel_geometry::{GeometryCalculator, Intersection, IntersectionType, LineSegment, Ray};
use rigel_linalg::{Orthogonal, Vec2d, Vec3d, Vector};

const ROUNDS: usize = 10_000;
const MIN_EXTENT: f64 = 0.05;

fn random_vec<const N: usize>(rng: &mut fastrand::Rng) -> Vector<f64, N> {
    Vector::from_generator(|| rng.f64() * 2.0 - 1.0)
}

/// Two lines through a common point `x`.
struct Crossing<const N: usize> {
    x: Vector<f64, N>,
    p1: Vector<f64, N>,
    p2: Vector<f64, N>,
}

impl<const N: usize> Crossing<N>
where
    Vector<f64, N>: Orthogonal,
{
    fn sample(rng: &mut fastrand::Rng) -> Self {
        loop {
            let x: Vector<f64, N> = random_vec(rng);
            let p1: Vector<f64, N> = random_vec(rng);
            let p2: Vector<f64, N> = random_vec(rng);
            let (a, b) = (x - p1, x - p2);
            if a.length() < MIN_EXTENT || b.length() < MIN_EXTENT || b[0].abs() < MIN_EXTENT {
                continue;
            }

            // Cosine of the angle between `a` and the normal used for `b`.
            let n = b.orthogonal();
            let cos = a.dot(n) / (a.length() * n.length());
            if !(cos.abs() >= MIN_EXTENT) {
                continue;
            }
            return Self { x, p1, p2 };
        }
    }

    fn v1(&self) -> Vector<f64, N> {
        self.x - self.p1
    }

    fn v2(&self) -> Vector<f64, N> {
        self.x - self.p2
    }
}

#[test]
fn parallel_lines_do_not_intersect() {
    let calc = GeometryCalculator::default();
    let mut rng = fastrand::Rng::with_seed(1);
    let mut checked = 0;
    while checked < ROUNDS {
        let dir: Vec2d = random_vec(&mut rng);
        let p1: Vec2d = random_vec(&mut rng);
        let p2: Vec2d = random_vec(&mut rng);
        let separation = (p2 - p1).perp_dot(dir).abs() / dir.length();
        if dir.length() < MIN_EXTENT || separation < 1e-6 {
            continue;
        }

        assert_eq!(calc.intersects(p1, dir, p2, dir), IntersectionType::None);
        assert_eq!(calc.intersects(p1, dir, p2, -dir), IntersectionType::None);
        assert_eq!(calc.intersection(p1, dir, p2, dir), Intersection::None);
        checked += 1;
    }
}

#[test]
fn coincident_lines() {
    let calc = GeometryCalculator::default();
    let mut rng = fastrand::Rng::with_seed(2);
    for _ in 0..ROUNDS {
        let dir: Vec2d = random_vec(&mut rng);
        let p: Vec2d = random_vec(&mut rng);

        assert_eq!(calc.intersects(p, dir, p, dir), IntersectionType::Coincident);
        assert_eq!(calc.intersects(p, dir, p, -dir), IntersectionType::Coincident);
        assert_eq!(calc.distance(p, dir, p, dir), Intersection::Coincident);
    }
}

#[test]
fn crossing_point_2d() {
    let calc = GeometryCalculator::default();
    let mut rng = fastrand::Rng::with_seed(3);
    for _ in 0..ROUNDS {
        let c = Crossing::<2>::sample(&mut rng);
        for (v1, v2) in [
            (c.v1(), c.v2()),
            (-c.v1(), c.v2()),
            (c.v1(), -c.v2()),
            (-c.v1(), -c.v2()),
        ] {
            assert_eq!(calc.intersects(c.p1, v1, c.p2, v2), IntersectionType::Intersect);
            let point = calc.intersection(c.p1, v1, c.p2, v2).hit().unwrap();
            assert!((point - c.x).length() <= 1e-10, "{point:?} != {:?}", c.x);
        }
    }
}

#[test]
fn crossing_distances_2d() {
    let calc = GeometryCalculator::default();
    let mut rng = fastrand::Rng::with_seed(4);
    for _ in 0..ROUNDS {
        let c = Crossing::<2>::sample(&mut rng);
        let (l1, l2) = (c.v1().length(), c.v2().length());

        for (s1, s2) in [(1.0, 1.0), (-1.0, 1.0), (1.0, -1.0), (-1.0, -1.0)] {
            let v1 = c.v1().normalized() * s1;
            let v2 = c.v2().normalized() * s2;

            let d1 = calc.distance(c.p1, v1, c.p2, v2).hit().unwrap();
            assert_relative_eq!(d1, s1 * l1, max_relative = 1e-9);

            let crossing = calc.intersection_distance(c.p1, v1, c.p2, v2).hit().unwrap();
            assert!((crossing.point - c.x).length() <= 1e-10);
            assert_relative_eq!(crossing.d1, s1 * l1, max_relative = 1e-9);
            assert_relative_eq!(crossing.d2, s2 * l2, max_relative = 1e-9);
        }
    }
}

#[test]
fn ray_hits_segment() {
    let calc = GeometryCalculator::default();
    let mut rng = fastrand::Rng::with_seed(5);
    for _ in 0..ROUNDS {
        let c = Crossing::<2>::sample(&mut rng);
        let ray = Ray::new(c.p1, c.v1());
        let segment = LineSegment::new(c.p2, c.v2() * 1.01);

        let hit = ray.distance_to_segment(&segment, &calc).hit().unwrap();
        assert!((hit.point - c.x).length() <= 1e-10);
        assert_relative_eq!(hit.d1, c.v1().length(), max_relative = 1e-9);
        assert!(0.0 < hit.d2 && hit.d2 < 1.0, "{}", hit.d2);
    }
}

#[test]
fn ray_misses_segment() {
    let calc = GeometryCalculator::default();
    let mut rng = fastrand::Rng::with_seed(6);
    for _ in 0..ROUNDS {
        let c = Crossing::<2>::sample(&mut rng);
        let ahead = Ray::new(c.p1, c.v1());
        let behind = Ray::new(c.p1, -c.v1());

        let long = LineSegment::new(c.p2, c.v2() * 1.01);
        let short = LineSegment::new(c.p2, c.v2() * 0.99);
        let shifted = LineSegment::new(c.p2 + long.extent, long.extent);

        // The underlying lines still cross.
        let crossing = calc.intersection_distance(c.p1, c.v1(), c.p2, short.extent);
        assert!(crossing.hit().unwrap().d2 > 1.0);
        let crossing = calc.intersection_distance(c.p1, c.v1(), shifted.start, shifted.extent);
        assert!(crossing.hit().unwrap().d2 < 0.0);

        assert_eq!(ahead.distance_to_segment(&short, &calc), Intersection::None);
        assert_eq!(ahead.distance_to_segment(&shifted, &calc), Intersection::None);
        assert_eq!(behind.distance_to_segment(&long, &calc), Intersection::None);
        assert_eq!(behind.distance_to_segment(&short, &calc), Intersection::None);
        assert_eq!(behind.distance_to_segment(&shifted, &calc), Intersection::None);
    }
}

#[test]
fn crossing_point_3d() {
    let calc = GeometryCalculator::default();
    let mut rng = fastrand::Rng::with_seed(7);
    for _ in 0..ROUNDS {
        let c = Crossing::<3>::sample(&mut rng);
        let crossing = calc
            .intersection_distance(c.p1, c.v1(), c.p2, c.v2())
            .hit()
            .unwrap();
        assert!((crossing.point - c.x).length() <= 1e-10);
        assert_relative_eq!(crossing.d1, 1.0, max_relative = 1e-9);
        assert_relative_eq!(crossing.d2, 1.0, max_relative = 1e-9);
    }
}

#[test]
fn parallel_3d() {
    let calc = GeometryCalculator::default();
    // Integer-valued inputs keep every dot product exact.
    let dirs = [
        Vec3d::from([1.0, 2.0, 3.0]),
        Vec3d::from([-4.0, 0.0, 1.0]),
        Vec3d::from([0.0, 0.0, 2.0]),
        Vec3d::from([1.0, 0.0, -1.0]),
    ];
    for dir in dirs {
        let p = Vec3d::from([1.0, -1.0, 2.0]);
        assert_eq!(
            calc.intersects(p, dir, p + dir * 2.0, -dir),
            IntersectionType::Coincident
        );

        let offset = dir.orthogonal();
        assert_eq!(
            calc.intersects(p, dir, p + offset, dir * 2.0),
            IntersectionType::None
        );
    }
}
