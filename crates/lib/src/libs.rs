//! Fixed link lists for external products.

/// ROOT libraries, as reported by `root-config --glibs` plus `m` and `dl`.
pub const ROOT_LIBS: &[&str] = &[
  "GenVector",
  "Core",
  "RIO",
  "Net",
  "Hist",
  "MLP",
  "Graf",
  "Graf3d",
  "Gpad",
  "Tree",
  "Rint",
  "Postscript",
  "Matrix",
  "Physics",
  "MathCore",
  "Thread",
  "Gui",
  "m",
  "dl",
];

/// BaBar tracking (BTrk) libraries in link order.
pub const BABAR_LIBS: &[&str] = &[
  "BTrk_KalmanTrack",
  "BTrk_DetectorModel",
  "BTrk_TrkBase",
  "BTrk_BField",
  "BTrk_BbrGeom",
  "BTrk_difAlgebra",
  "BTrk_ProbTools",
  "BTrk_BaBar",
  "BTrk_MatEnv",
];
