mod cuboid_cuboid;
mod polygon_polygon;
