// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Mesh tools built on `prism-math`.
//!
//! Currently this covers applying a transformation to whole arrays of vertex
//! data: positions are transformed as points, normals and tangents as vectors.

#![warn(missing_docs)]

pub mod transform;

pub use self::transform::{
    transform_points, transform_points_in_place, transform_vectors, transform_vectors_in_place,
    PointTransform, VectorTransform,
};
