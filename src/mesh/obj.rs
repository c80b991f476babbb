use std::io::Write;

use crate::error::Result;

use super::Model;

impl Model {
    /// Writes the model as a Wavefront OBJ document.
    ///
    /// Every polygon contributes its own `v`/`vn` lines; faces with more than
    /// three vertices are fan-triangulated.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `writer` fails.
    pub fn write_obj<W: Write>(&self, writer: &mut W) -> Result<()> {
        for polygon in &self.polygons {
            for (p, n) in polygon.vertices().iter().zip(polygon.normals()) {
                writeln!(writer, "v {} {} {}", p.x, p.y, p.z)?;
                writeln!(writer, "vn {} {} {}", n.x, n.y, n.z)?;
            }
        }

        let mut base = 1usize;
        for polygon in &self.polygons {
            let count = polygon.vertices().len();
            for k in 1..count - 1 {
                let (a, b, c) = (base, base + k, base + k + 1);
                writeln!(writer, "f {a}//{a} {b}//{b} {c}//{c}")?;
            }
            base += count;
        }
        Ok(())
    }
}
