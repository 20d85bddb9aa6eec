use ncollide2d::na::Point3;
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

#[derive(Serialize)]
#[serde(remote = "Point3<f64>")]
pub struct Point3f64 {
    x: f64,
    y: f64,
    z: f64,
}

struct Point3Ref<'a>(&'a Point3<f64>);

impl Serialize for Point3Ref<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Point3f64::serialize(self.0, serializer)
    }
}

/// Serializes a sequence of points as a list of `{x, y, z}` objects, for use with
/// `#[serde(serialize_with = "point3_seq")]`
pub fn point3_seq<S: Serializer>(points: &[Point3<f64>], serializer: S) -> Result<S::Ok, S::Error> {
    let mut seq = serializer.serialize_seq(Some(points.len()))?;
    for p in points.iter() {
        seq.serialize_element(&Point3Ref(p))?;
    }
    seq.end()
}
